use crate::core::models::alignment::ScoredAlignment;
use std::io::{self, Write};

/// Writes alignments in emission order: a score line followed by the two aligned rows.
pub struct AlignmentReport<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> AlignmentReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write_alignment(&mut self, scored: &ScoredAlignment) -> io::Result<()> {
        writeln!(self.writer, "{}", scored.score)?;
        self.writer.write_all(scored.alignment.first())?;
        writeln!(self.writer)?;
        self.writer.write_all(scored.alignment.second())?;
        writeln!(self.writer)?;
        self.written += 1;
        Ok(())
    }

    /// Drains `alignments` into the writer and returns how many were written.
    pub fn write_all<I>(&mut self, alignments: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = ScoredAlignment>,
    {
        let before = self.written;
        for scored in alignments {
            self.write_alignment(&scored)?;
        }
        Ok(self.written - before)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
