use wsusscn2_cli::prelude::*;

/// Mock OutputPresenter that keeps every chunk it is handed
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub chunks: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.chunks.lock().unwrap().concat()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.lock().unwrap().len()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.chunks.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
