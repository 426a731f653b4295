use assert_cmd::Command;

pub fn azblog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("azblog").unwrap();
    cmd.env_remove("AZBLOG_CONFIG");
    cmd.env_remove("AZBLOG_LOG");
    cmd
}
