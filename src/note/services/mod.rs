//! Application services for the notebook.

mod notebook;

pub use notebook::{
    CreateNoteRequest, NotebookError, NotebookResult, NotebookService, UpdateNoteRequest,
};
