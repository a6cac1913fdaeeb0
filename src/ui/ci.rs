//! GitHub Actions workflow commands

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = match title {
        Some(title) => format!(" title={}", escape_workflow_command_property(title)),
        None => String::new(),
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_data(message)
    )
}

/// Escaping for the message part of a workflow command
pub fn escape_workflow_command_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Properties additionally escape the `:` and `,` separators
fn escape_workflow_command_property(s: &str) -> String {
    escape_workflow_command_data(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}
