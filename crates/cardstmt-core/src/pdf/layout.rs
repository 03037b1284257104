//! Page, line, and cell model for extracted statement text.
//!
//! Bank PDFs do not keep table semantics, but the extracted text keeps the
//! horizontal gaps between columns. A line is split into cells wherever two or
//! more spaces (or a tab) separate runs of text, and every cell remembers the
//! character column it starts at so a value can be matched to the header label
//! printed above it.

/// Minimum run of spaces that separates two cells.
const CELL_GAP: usize = 2;

/// Spaces substituted for a tab character.
const TAB_WIDTH: &str = "    ";

/// A run of text on a line, separated from its neighbours by a wide gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCell {
    /// Character column where the cell starts (0-indexed).
    pub column: usize,
    /// Cell text without surrounding whitespace.
    pub text: String,
}

impl TextCell {
    /// Column one past the last character of the cell.
    pub fn end(&self) -> usize {
        self.column + self.text.chars().count()
    }

    /// Number of columns shared with the `[start, end)` span.
    pub fn overlap(&self, start: usize, end: usize) -> usize {
        self.end().min(end).saturating_sub(self.column.max(start))
    }
}

/// A single physical line of page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Line text with trailing whitespace removed.
    pub text: String,
    /// Cells in left-to-right order.
    pub cells: Vec<TextCell>,
}

impl TextLine {
    /// Build a line from raw text, computing its cells.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text
            .into()
            .replace('\t', TAB_WIDTH)
            .replace('\u{00a0}', " ")
            .trim_end()
            .to_string();
        let cells = split_cells(&text);
        Self { text, cells }
    }

    /// Whether the line has no visible text.
    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }

    /// Line text without leading indentation.
    pub fn trimmed(&self) -> &str {
        self.text.trim_start()
    }

    /// Column of the first visible character.
    pub fn indent(&self) -> usize {
        self.cells.first().map(|c| c.column).unwrap_or(0)
    }

    /// Convert a byte offset into `text` to a character column.
    pub fn column_of(&self, byte_offset: usize) -> usize {
        self.text
            .get(..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0)
    }

    /// The cell sharing the most columns with `[start, end)`, if any overlaps.
    pub fn cell_under(&self, start: usize, end: usize) -> Option<&TextCell> {
        self.cells
            .iter()
            .map(|cell| (cell.overlap(start, end), cell))
            .filter(|(overlap, _)| *overlap > 0)
            .max_by_key(|(overlap, _)| *overlap)
            .map(|(_, cell)| cell)
    }
}

/// Text of one PDF page as ordered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    /// Lines in reading order.
    pub lines: Vec<TextLine>,
}

impl PageText {
    /// Build a page from newline-separated text.
    pub fn from_text(number: u32, text: &str) -> Self {
        Self {
            number,
            lines: text.lines().map(TextLine::new).collect(),
        }
    }

    /// Number of non-whitespace characters on the page.
    pub fn char_count(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.text.chars().filter(|c| !c.is_whitespace()).count())
            .sum()
    }

    /// Page text joined back with newlines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split text into pages on form feeds, dropping blank pages.
pub fn pages_from_text(text: &str) -> Vec<PageText> {
    text.split('\u{000c}')
        .filter(|page| !page.trim().is_empty())
        .enumerate()
        .map(|(i, page)| PageText::from_text(i as u32 + 1, page))
        .collect()
}

/// Iterate over every line of every page in order.
pub fn all_lines(pages: &[PageText]) -> impl Iterator<Item = &TextLine> {
    pages.iter().flat_map(|p| p.lines.iter())
}

fn split_cells(text: &str) -> Vec<TextCell> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut spaces = 0;

    for (column, ch) in text.chars().enumerate() {
        if ch == ' ' {
            spaces += 1;
            continue;
        }

        if !current.is_empty() && spaces >= CELL_GAP {
            cells.push(TextCell {
                column: start,
                text: std::mem::take(&mut current),
            });
        }

        if current.is_empty() {
            start = column;
        } else {
            current.extend(std::iter::repeat_n(' ', spaces));
        }
        spaces = 0;
        current.push(ch);
    }

    if !current.is_empty() {
        cells.push(TextCell {
            column: start,
            text: current,
        });
    }

    cells
}
