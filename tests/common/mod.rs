use assert_cmd::Command;

pub fn travel_cmd() -> Command {
    let mut cmd = Command::cargo_bin("travel").unwrap();
    cmd.env_remove("TRAVEL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
