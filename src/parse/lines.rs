/// Line view over a text buffer.
///
/// Iterating yields each line with its line terminator (`\n` or `\r\n`)
/// removed. The view is `Copy`, so iterating it again starts over from the
/// first line.
#[derive(Debug, Clone, Copy)]
pub struct TextLines<'a> {
    source: &'a str,
}

impl<'a> TextLines<'a> {
    pub fn new(source: &'a str) -> Self {
        TextLines { source }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.source
            .split_terminator('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl<'a> IntoIterator for TextLines<'a> {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
