/// Characters the build engine cannot accept in a target name segment.
/// Each one is replaced by `_`.
const ESCAPED_CHARS: [char; 8] = ['%', '$', '@', ';', '.', '(', ')', '\''];

pub fn escape_target_segment(name: &str) -> String {
    name.chars()
        .map(|c| if ESCAPED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Join escaped names root first with `\`, the form used to address one
/// project's target when building the whole manifest.
pub fn build_target_name<'a>(names_root_first: impl IntoIterator<Item = &'a str>) -> String {
    names_root_first
        .into_iter()
        .map(escape_target_segment)
        .collect::<Vec<_>>()
        .join("\\")
}
