use crate::core::{
    error::{Result, TarShellError},
    path_resolver::PathResolver,
    vfs::{leaf_name, VirtualFs},
};

/// Render the hierarchy below `path` (or `cwd`), one name per line
///
/// Each level of depth appends `marker` to the indentation. Children appear
/// in stored order.
pub fn execute_tree(fs: &VirtualFs, cwd: &str, path: Option<&str>, marker: &str) -> Result<String> {
    let root = match path {
        None => cwd.to_string(),
        Some(raw) => PathResolver::new(fs, cwd)
            .resolve_directory(raw)
            .ok_or_else(|| TarShellError::no_such_directory(raw))?,
    };

    let mut output = String::new();
    render_node(fs, &root, "", marker, &mut output);
    output.push('\n');
    Ok(output)
}

fn render_node(fs: &VirtualFs, path: &str, indent: &str, marker: &str, output: &mut String) {
    output.push_str(indent);
    output.push_str(leaf_name(path));

    // files and empty directories end the branch
    let Some(children) = fs.children(path) else {
        return;
    };
    let child_indent = format!("{indent}{marker}");
    for child in children {
        output.push('\n');
        render_node(fs, &format!("{path}/{child}"), &child_indent, marker, output);
    }
}
