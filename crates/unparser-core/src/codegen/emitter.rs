/// Emitter is the append-only output sink for a single render.
/// It holds no state besides the text written so far, so every render
/// gets its own instance and independent trees can be rendered in parallel.
#[derive(Debug, Default)]
pub struct Emitter {
    output: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write several fragments in order.
    pub fn write_all(&mut self, parts: &[&str]) {
        for part in parts {
            self.output.push_str(part);
        }
    }

    pub fn output_ref(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}
