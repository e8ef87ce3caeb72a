use std::fmt;

/// The position of a field within a call structure, from the root.
#[derive(Debug, Default)]
pub(super) struct Path {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Field(String),
    Row(usize),
}

impl Path {
    pub(super) fn push_field(&mut self, name: &str) {
        self.segments.push(Segment::Field(name.to_string()));
    }

    pub(super) fn push_row(&mut self, index: usize) {
        self.segments.push(Segment::Row(index));
    }

    pub(super) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Row(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
