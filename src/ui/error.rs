//! Error reporting for the binary

use gmtree::TreeError;

use super::json::{self, ErrorEvent};

/// Exit status for a failed run
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<TreeError>() {
        Some(TreeError::NoInput) => 2,
        _ => 1,
    }
}

/// Returns true if the usage text should follow the error
pub fn wants_help(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<TreeError>(), Some(TreeError::NoInput))
}

/// Short machine-readable name of the failure
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<TreeError>() {
        Some(TreeError::MalformedLine { .. }) => "malformed_line",
        Some(TreeError::EmptyGraph) => "empty_graph",
        Some(TreeError::NoMatch { .. }) => "no_match",
        Some(TreeError::CorruptTree { .. }) => "corrupt_tree",
        Some(TreeError::NoInput) => "no_input",
        Some(TreeError::InvalidConfig { .. }) => "invalid_config",
        Some(TreeError::Io(_)) => "io",
        None => "other",
    }
}

fn hint(err: &TreeError) -> Option<&'static str> {
    match err {
        TreeError::MalformedLine { .. } => {
            Some("each line must be `<module> <dependency>`, as printed by `go mod graph`")
        }
        TreeError::EmptyGraph => Some("the input did not contain any dependency pair"),
        TreeError::NoMatch { .. } => {
            Some("check the identifiers given to --filter / --filter-no-version")
        }
        TreeError::CorruptTree { .. } => Some("this is a bug in gmtree, please report it"),
        TreeError::InvalidConfig { .. } => Some("fix the config file or point --config elsewhere"),
        TreeError::NoInput | TreeError::Io(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut text = format!("[ERROR] {}\n", err);
    if let Some(hint) = err.downcast_ref::<TreeError>().and_then(hint) {
        text.push_str(&format!("  hint: {}\n", hint));
    }
    text
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let event = ErrorEvent::new(error_kind(err), err.to_string());
        let _ = json::emit(&event);
        return;
    }

    eprint!("{}", format_error(err));
}
