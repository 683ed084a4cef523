use structopt::StructOpt;

///
/// An instance of the pinbump CLI designed for testing
///
/// Runs every command against a `Package.resolved` file
/// living in its own temporary directory
pub struct TestApp {
    tmp_dir: tempdir::TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let tmp_dir = tempdir::TempDir::new("test-pinbump").unwrap();
        TestApp { tmp_dir }
    }

    pub fn resolved_path(&self) -> std::path::PathBuf {
        self.tmp_dir.path().join(pinbump::RESOLVED_FILE_NAME)
    }

    pub fn run(&self, args: Vec<String>) -> Result<(), pinbump::Error> {
        let mut cmd = vec!["pinbump".to_string()];
        let resolved_path: String = self.resolved_path().to_string_lossy().into();
        cmd.extend(vec!["--resolved-path".to_string(), resolved_path]);
        cmd.extend(args);
        let cmd = pinbump::Command::from_iter_safe(cmd).unwrap();
        pinbump::run(cmd)
    }

    pub fn assert_run_ok(&self, args: &[&str]) {
        let args = to_string_args(&args);
        self.run(args).unwrap();
    }

    pub fn assert_run_error(&self, args: &[&str]) -> String {
        let args = to_string_args(&args);
        let res = self.run(args);
        res.unwrap_err().to_string()
    }

    pub fn write_resolved(&self, contents: &str) {
        std::fs::write(self.resolved_path(), contents).unwrap();
    }

    pub fn read_resolved(&self) -> String {
        std::fs::read_to_string(self.resolved_path()).unwrap()
    }
}

pub fn to_string_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|x| x.to_string()).collect()
}
