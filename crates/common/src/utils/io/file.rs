use std::{
    env,
    fs::File,
    io::{Read, Write},
    path::Path,
    process::Command,
};

use eyre::Result;

/// Convert a long path to a short path.
///
/// ```no_run
/// use stevedore_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/frontend-deployment.yaml";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./frontend-deployment.yaml");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.into_os_string().into_string().unwrap_or(String::new()), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc
///
/// ```no_run
/// use stevedore_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    // Create the directory if it doesn't exist
    std::fs::create_dir_all(
        path.parent().ok_or_else(|| eyre::eyre!("unable to create directory"))?,
    )?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use stevedore_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    let path = Path::new(path);
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file from the disc
///
/// ```no_run
/// use stevedore_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path(_path: &str) -> bool {
    let path = match std::path::Path::new(_path).to_str() {
        Some(path) => path,
        None => return false,
    };

    Command::new("rm").args(["-rf", path]).output().is_ok()
}
