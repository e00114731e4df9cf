use crate::types::Cue;

/// Format fractional seconds as an SRT timestamp `HH:MM:SS,mmm`
pub fn format_timestamp(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let mut secs = total_millis / 1000;
    let mut mins = secs / 60;
    secs -= mins * 60;
    let hours = mins / 60;
    mins -= hours * 60;
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Render an ordered cue sequence as SubRip text.
///
/// Empty input yields an empty string with no byte-order marker; non-empty
/// input starts with U+FEFF so players detect the encoding.
pub fn cues_to_srt(cues: &[Cue]) -> String {
    if cues.is_empty() {
        return String::new();
    }

    let mut out = String::from('\u{FEFF}');
    for (i, cue) in cues.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            cue.text
        ));
    }

    out
}

/// Build the copy-paste download command for a captured manifest URL.
/// The command is displayed, never executed.
pub fn render_ffmpeg_command(manifest_url: &str, lesson_title: &str) -> String {
    format!(
        "ffmpeg -i \"{}\" -c copy \"{}.mp4\"",
        manifest_url, lesson_title
    )
}
