//! Test doubles for the directory source port.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use placeholder_gateway::domain::ports::{
    CommentRecord, DirectorySource, DirectorySourceError, UserRecord,
};

/// Configurable success or failure outcome for one fetch operation.
#[derive(Clone)]
pub(crate) enum FetchResponse<T> {
    Ok(Vec<T>),
    Err(DirectorySourceError),
}

impl<T: Clone> FetchResponse<T> {
    fn into_result(self) -> Result<Vec<T>, DirectorySourceError> {
        match self {
            Self::Ok(records) => Ok(records),
            Self::Err(error) => Err(error),
        }
    }
}

/// Directory source double recording which resources were fetched.
#[derive(Clone)]
pub(crate) struct RecordingDirectorySource {
    calls: Arc<Mutex<Vec<&'static str>>>,
    users: Arc<Mutex<FetchResponse<UserRecord>>>,
    comments: Arc<Mutex<FetchResponse<CommentRecord>>>,
}

impl RecordingDirectorySource {
    /// Create a double whose fetches succeed with empty collections.
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            users: Arc::new(Mutex::new(FetchResponse::Ok(Vec::new()))),
            comments: Arc::new(Mutex::new(FetchResponse::Ok(Vec::new()))),
        }
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn set_users(&self, response: FetchResponse<UserRecord>) {
        *self.users.lock().expect("users response lock") = response;
    }

    pub(crate) fn set_comments(&self, response: FetchResponse<CommentRecord>) {
        *self.comments.lock().expect("comments response lock") = response;
    }
}

#[async_trait]
impl DirectorySource for RecordingDirectorySource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectorySourceError> {
        self.calls.lock().expect("calls lock").push("users");
        self.users
            .lock()
            .expect("users response lock")
            .clone()
            .into_result()
    }

    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, DirectorySourceError> {
        self.calls.lock().expect("calls lock").push("comments");
        self.comments
            .lock()
            .expect("comments response lock")
            .clone()
            .into_result()
    }
}
