/// Alert keyword phrases and the note each one raises. Checked independently
/// in table order; presence only, so a keyword repeated in the text still
/// yields a single note.
const NOTE_RULES: &[(&str, &str)] = &[
    ("急落に注意", "急落に注意が必要"),
    ("上昇トレンド継続", "上昇トレンド継続の可能性"),
];

pub(crate) fn detect_notes(text: &str) -> Vec<String> {
    NOTE_RULES
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, note)| (*note).to_string())
        .collect()
}
