use std::{env, io::Write};

use eyre::{eyre, Result};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is `print`, the caller prints instead and this is not called
/// - if `output` is the default value (`output`), return `{cwd}/output/{plan_name}/{filename}`
/// - if `output` is specified, return `/{output}/{filename}`
pub(crate) fn build_output_path(output: &str, plan_name: &str, filename: &str) -> Result<String> {
    // if output is the default value, build a path based on the plan name
    if output == "output" {
        // get the current working directory
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        return Ok(format!("{cwd}/output/{plan_name}/{filename}"));
    }

    // output is specified, return the path
    Ok(format!("{output}/{filename}"))
}

/// pass the input to the `less` command
pub(crate) async fn print_with_less(input: &str) -> Result<()> {
    let mut child =
        std::process::Command::new("less").stdin(std::process::Stdio::piped()).spawn()?;

    let stdin = child.stdin.as_mut().ok_or_else(|| eyre!("unable to get stdin for less"))?;
    stdin.write_all(input.as_bytes())?;

    child.wait()?;
    Ok(())
}
