use crate::foundation::error::{InkError, InkResult};

/// An externally generated N×N QR module matrix; `true` is a dark module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Build from row-major modules. `modules.len()` must be `size * size` and `size > 0`.
    pub fn new(size: usize, modules: Vec<bool>) -> InkResult<Self> {
        if size == 0 {
            return Err(InkError::validation("module grid must be at least 1x1"));
        }
        if size.checked_mul(size) != Some(modules.len()) {
            return Err(InkError::validation(format!(
                "module grid of size {size} needs {} modules, got {}",
                size.saturating_mul(size),
                modules.len()
            )));
        }
        Ok(Self { size, modules })
    }

    /// Build from rows; every row must be as long as there are rows.
    pub fn from_rows(rows: &[Vec<bool>]) -> InkResult<Self> {
        let size = rows.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(InkError::validation(format!(
                "module grid row {idx} has {} modules, expected {size}",
                row.len()
            )));
        }
        Self::new(size, rows.concat())
    }

    /// Parse a textual matrix: one line per row, `#`/`1` dark and `.`/`0`/space light.
    ///
    /// Blank lines are skipped and trailing whitespace ignored, so `qrencode -t ASCII`-style
    /// output with stripped margins loads directly.
    pub fn parse(text: &str) -> InkResult<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    '#' | '1' | 'X' | 'x' => Ok(true),
                    '.' | '0' | ' ' | '_' => Ok(false),
                    other => Err(InkError::validation(format!(
                        "module grid line {}: unexpected character {other:?}",
                        line_no + 1
                    ))),
                })
                .collect::<InkResult<Vec<bool>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` is dark; out-of-range cells are light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// All cells as `(row, col, dark)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, &dark)| (i / self.size, i % self.size, dark))
    }
}

/// Join-a-network payload understood by phone cameras (`WIFI:T:WPA;S:..;P:..;;`).
///
/// Feed the result to a QR encoder; `\`, `;`, `,`, `:` and `"` are backslash-escaped. An empty
/// password produces an open-network (`T:nopass`) payload.
pub fn wifi_payload(ssid: &str, password: &str) -> String {
    fn escape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            if matches!(ch, '\\' | ';' | ',' | ':' | '"') {
                out.push('\\');
            }
            out.push(ch);
        }
        out
    }

    if password.is_empty() {
        format!("WIFI:T:nopass;S:{};;", escape(ssid))
    } else {
        format!("WIFI:T:WPA;S:{};P:{};;", escape(ssid), escape(password))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/qr/grid.rs"]
mod tests;
