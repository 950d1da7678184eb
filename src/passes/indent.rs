pub struct IndentProbePass;

impl IndentProbePass {
    /// Leading whitespace of the first line containing `marker`, or `""`.
    pub fn probe<'a>(contents: &'a str, marker: &str) -> &'a str {
        contents
            .split('\n')
            .find(|line| line.contains(marker))
            .map_or("", |line| &line[..line.len() - line.trim_start().len()])
    }
}
