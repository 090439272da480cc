use solar_verify::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps everything it is given
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub output: Arc<Mutex<String>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.output.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.output.lock().unwrap().push_str(content);
        Ok(())
    }
}
