mod manager;
mod persistence;

pub use manager::SessionState;
pub use persistence::{
    clear_session, load_session, save_session, StoredParameters, StoredSession,
};
