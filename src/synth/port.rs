//! Service port resolution.

use crate::detection::{Language, Project};
use crate::error::Result;
use crate::ui::Console;

/// Label of the menu entry that switches to free-form input.
pub const OTHER_PORT_LABEL: &str = "Other";

/// Port assumed when the default builder packages the service.
pub fn default_port(language: Language) -> u16 {
    match language {
        Language::Java | Language::DotNet => 8080,
        _ => 80,
    }
}

/// Parse a user-entered port.
///
/// The error is the message to show before asking again.
pub fn parse_port(text: &str) -> std::result::Result<u16, &'static str> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| "Port must be an integer.")?;
    if !(1..=65535).contains(&value) {
        return Err("Port must be a value between 1 and 65535.");
    }
    u16::try_from(value).map_err(|_| "Port must be a value between 1 and 65535.")
}

fn port_key(name: &str) -> String {
    format!("port:{}", name)
}

fn port_select_key(name: &str) -> String {
    format!("port_select:{}", name)
}

/// Work out the port `project` (deployed as `name`) listens on.
///
/// Without a build descriptor the language default is used. A descriptor
/// with a single port is trusted. Otherwise the user chooses.
pub fn resolve_port(console: &mut Console<'_>, name: &str, project: &Project) -> Result<u16> {
    let docker = match &project.docker {
        Some(docker) if !docker.path.as_os_str().is_empty() => docker,
        _ => return Ok(default_port(project.language)),
    };

    match docker.ports.as_slice() {
        [only] => Ok(only.number),
        [] => prompt_port_number(
            console,
            &port_key(name),
            &format!("What port does '{}' listen on?", name),
        ),
        ports => {
            let mut labels: Vec<String> = ports.iter().map(|p| p.number.to_string()).collect();
            labels.push(OTHER_PORT_LABEL.to_string());

            let choice = console.select(
                &port_select_key(name),
                &format!("What port does '{}' listen on?", name),
                &labels,
                None,
            )?;

            match ports.get(choice) {
                Some(port) => Ok(port.number),
                None => prompt_port_number(
                    console,
                    &port_key(name),
                    &format!("Provide the port number for '{}':", name),
                ),
            }
        }
    }
}

fn prompt_port_number(console: &mut Console<'_>, key: &str, question: &str) -> Result<u16> {
    loop {
        let answer = console.input(key, question, None)?;
        match parse_port(&answer) {
            Ok(port) => return Ok(port),
            Err(msg) => console.reject(key, msg)?,
        }
    }
}
