use std::{
    future::Future,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use futures::future::{AbortHandle, Abortable};
use tokio::task::JoinHandle;

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

type Slot = Arc<Mutex<Option<AsyncState>>>;

fn lock(slot: &Slot) -> std::sync::MutexGuard<'_, Option<AsyncState>> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

/// Handed to every loaded task so it can tell whether a newer task replaced it
#[derive(Clone)]
pub struct Ticket {
    id: usize,
    loading: Slot,
}

impl Ticket {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_current(&self) -> bool {
        lock(&self.loading).as_ref().map(|state| state.id) == Some(self.id)
    }
}

/// Runs at most one task at a time, loading a new task aborts the previous one
pub struct AsyncLoader {
    loading: Slot,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Arc::new(Mutex::new(None)),
        }
    }

    pub fn cancel(&self) {
        self.replace(None)
    }

    fn replace(&self, value: Option<AsyncState>) {
        let mut loading = lock(&self.loading);
        if let Some(state) = loading.as_mut() {
            debug!("aborting task {}", state.id);
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F, Fut>(&self, task: F) -> JoinHandle<()>
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();

        let state = AsyncState::new(handle);
        let id = state.id;
        let ticket = Ticket {
            id,
            loading: self.loading.clone(),
        };
        let fut = Abortable::new(task(ticket), registration);

        self.replace(Some(state));

        let loading = self.loading.clone();

        tokio::spawn(async move {
            match fut.await {
                Ok(()) => {
                    let mut loading = lock(&loading);

                    if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                        if current_id == id {
                            *loading = None;
                        }
                    }
                }
                Err(_) => {
                    debug!("task {id} aborted");
                }
            }
        })
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.loading).is_some()
    }
}
