//! Common test utilities for envx integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A sandboxed installation layout for integration tests
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory backing the whole layout
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Installation root handed to envx via ENVX_INSTALLATION_PATH
    pub installation_path: PathBuf,
    /// Entry-point directory handed to envx via ENVX_BIN_DIR
    pub bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new empty layout; envx itself creates the directories
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let installation_path = temp.path().join("envs");
        let bin_dir = temp.path().join("bin");
        Self {
            temp,
            installation_path,
            bin_dir,
        }
    }

    /// Write a file under the layout root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the layout root
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.temp.path().join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists under the layout root
    pub fn file_exists(&self, path: &str) -> bool {
        self.temp.path().join(path).exists()
    }

    /// Write a lockfile into the layout and return its absolute path
    pub fn write_lockfile(&self, name: &str, contents: &str) -> PathBuf {
        let locks = self.temp.path().join("locks");
        std::fs::create_dir_all(&locks).expect("Failed to create locks directory");
        let path = locks.join(name);
        std::fs::write(&path, contents).expect("Failed to write lockfile");
        path
    }

    /// Path of the environment envx builds for `package_name`
    pub fn package_dir(&self, package_name: &str) -> PathBuf {
        self.installation_path.join(package_name)
    }

    /// Create a fake conda executable that records its invocation and
    /// fakes `create` by touching `<prefix>/bin/<entry_point>` stubs
    #[cfg(unix)]
    pub fn fake_conda(&self, entry_points: &[&str]) -> PathBuf {
        self.fake_conda_with_exit(entry_points, 0)
    }

    /// Like [`Self::fake_conda`], but the script exits with `exit_code`
    /// before creating anything when it is non-zero
    #[cfg(unix)]
    pub fn fake_conda_with_exit(&self, entry_points: &[&str], exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tools = self.tools_dir();
        std::fs::create_dir_all(&tools).expect("Failed to create tools directory");

        let stubs: String = entry_points
            .iter()
            .map(|ep| {
                format!(
                    "printf '#!/bin/sh\\n' > \"$prefix/bin/{ep}\"\nchmod +x \"$prefix/bin/{ep}\"\n"
                )
            })
            .collect();

        // The suite shrinks PATH in some tests, so the script pins its own
        let script = format!(
            "#!/bin/sh\n\
             PATH=\"/usr/bin:/bin:/usr/local/bin:$PATH\"\n\
             export PATH\n\
             echo \"$@\" > \"{args}\"\n\
             prefix=\"\"\n\
             file=\"\"\n\
             while [ $# -gt 0 ]; do\n\
               case \"$1\" in\n\
                 --prefix) prefix=\"$2\"; shift 2 ;;\n\
                 --file) file=\"$2\"; shift 2 ;;\n\
                 *) shift ;;\n\
               esac\n\
             done\n\
             if [ {exit_code} -ne 0 ]; then\n\
               exit {exit_code}\n\
             fi\n\
             mkdir -p \"$prefix/bin\"\n\
             cp \"$file\" \"{received}\"\n\
             {stubs}\
             exit 0\n",
            args = tools.join("args.txt").display(),
            received = tools.join("received.lock").display(),
        );

        let conda = tools.join("conda");
        std::fs::write(&conda, script).expect("Failed to write fake conda");
        let mut perms = std::fs::metadata(&conda)
            .expect("Failed to stat fake conda")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&conda, perms).expect("Failed to mark fake conda executable");
        conda
    }

    /// Directory the fake conda lives in, usable as a PATH entry
    pub fn tools_dir(&self) -> PathBuf {
        self.temp.path().join("tools")
    }

    /// The command line the fake conda was invoked with
    #[cfg(unix)]
    pub fn recorded_args(&self) -> String {
        std::fs::read_to_string(self.tools_dir().join("args.txt"))
            .expect("Fake conda was never invoked")
    }

    /// The lockfile contents the fake conda was handed via `--file`
    #[cfg(unix)]
    pub fn received_lockfile(&self) -> String {
        std::fs::read_to_string(self.tools_dir().join("received.lock"))
            .expect("Fake conda did not receive a lockfile")
    }

    /// Whether the fake conda was invoked at all
    #[cfg(unix)]
    pub fn conda_was_invoked(&self) -> bool {
        self.tools_dir().join("args.txt").exists()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform identifier envx derives for the host running the tests
#[allow(dead_code)]
pub fn current_platform_id() -> &'static str {
    if cfg!(target_os = "linux") {
        "linux-64"
    } else if cfg!(target_os = "macos") {
        "osx-64"
    } else {
        "win-64"
    }
}

/// A combined lockfile with metadata and artifact links for the host platform
#[allow(dead_code)]
pub fn combined_lockfile(package_name: &str, entry_points: &[&str], links: &[&str]) -> String {
    let eps = entry_points
        .iter()
        .map(|ep| format!("\"{ep}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let urls = links
        .iter()
        .map(|link| format!("\"{link}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{
  "metadata": {{"package_name": "{package_name}", "entry_points": [{eps}]}},
  "platform_tar_links": {{"{platform}": [{urls}]}}
}}"#,
        platform = current_platform_id()
    )
}

/// Serve a fixed sequence of canned HTTP responses on a loopback port.
///
/// Each accepted connection gets the next response, then the listener shuts
/// down. Lets fetch tests run without touching the real network. Returns the
/// base URL, e.g. `http://127.0.0.1:34567`.
#[allow(dead_code)]
pub fn serve_http_responses(responses: Vec<String>) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test HTTP listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");

    std::thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            // Drain the request headers before answering
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}

/// A 200 response carrying `body`
#[allow(dead_code)]
pub fn http_ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// A 302 redirect to `location`
#[allow(dead_code)]
pub fn http_redirect(location: &str) -> String {
    format!(
        "HTTP/1.1 302 Found\r\nLocation: {location}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    )
}

/// A 404 response
#[allow(dead_code)]
pub fn http_not_found() -> String {
    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_layout_starts_empty() {
        let env = TestEnv::new();
        assert!(!env.installation_path.exists());
        assert!(!env.bin_dir.exists());
    }

    #[test]
    fn test_env_write_lockfile() {
        let env = TestEnv::new();
        let path = env.write_lockfile("black.lock.json", "{}");
        assert!(path.is_file());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_combined_lockfile_targets_host_platform() {
        let lock = combined_lockfile("black", &["black"], &["https://example.com/a.tar.bz2"]);
        assert!(lock.contains(current_platform_id()));
        assert!(lock.contains("\"package_name\": \"black\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_fake_conda_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let env = TestEnv::new();
        let conda = env.fake_conda(&["black"]);
        let mode = std::fs::metadata(conda).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
