use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CommandOutput, CreateView};

pub trait Renderer {
    fn render<T>(&self, result: CommandOutput<T>) -> Result<()>
    where
        T: Serialize + CreateView;
}
