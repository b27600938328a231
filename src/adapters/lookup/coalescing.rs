//! Coalescing lookup decorator.
//!
//! Concurrent lookups for the same CNPJ (a blur event racing an explicit
//! search, two tabs, a double click) share one outbound request. Once the
//! shared request settles the entry is dropped, so later lookups always go
//! to the registry again. Nothing is cached.
//!
//! Every caller holds a waiter guard. When the last waiter goes away before
//! the request settles (the client disconnected and the handler future was
//! dropped) the entry is removed and the request is cancelled with it.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::company::{Cnpj, CompanyProfile};
use crate::ports::{CompanyLookup, LookupError};

type SharedLookup = Shared<BoxFuture<'static, Result<CompanyProfile, LookupError>>>;

struct InFlight {
    request: SharedLookup,
    waiters: usize,
}

type InFlightMap = Mutex<HashMap<Cnpj, InFlight>>;

// Never held across an await.
fn lock(map: &InFlightMap) -> MutexGuard<'_, HashMap<Cnpj, InFlight>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Wraps a lookup so in-flight requests for one CNPJ are shared.
pub struct CoalescingCompanyLookup {
    inner: Arc<dyn CompanyLookup>,
    in_flight: InFlightMap,
}

impl CoalescingCompanyLookup {
    pub fn new(inner: Arc<dyn CompanyLookup>) -> Self {
        Self {
            inner,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        lock(&self.in_flight).len()
    }

    fn join(&self, cnpj: &Cnpj) -> SharedLookup {
        let mut in_flight = lock(&self.in_flight);
        let entry = in_flight.entry(cnpj.clone()).or_insert_with(|| {
            let inner = Arc::clone(&self.inner);
            let key = cnpj.clone();
            InFlight {
                request: async move { inner.lookup(&key).await }.boxed().shared(),
                waiters: 0,
            }
        });
        if entry.waiters > 0 {
            tracing::debug!(cnpj = %cnpj, "Joining in-flight registry lookup");
        }
        entry.waiters += 1;
        entry.request.clone()
    }
}

/// One caller's claim on an in-flight entry, released on drop.
struct Waiter<'a> {
    in_flight: &'a InFlightMap,
    cnpj: &'a Cnpj,
    request: SharedLookup,
    settled: bool,
}

impl Drop for Waiter<'_> {
    fn drop(&mut self) {
        let mut in_flight = lock(self.in_flight);
        let Some(entry) = in_flight.get_mut(self.cnpj) else {
            return;
        };
        if !entry.request.ptr_eq(&self.request) {
            return;
        }

        entry.waiters = entry.waiters.saturating_sub(1);
        if self.settled || entry.waiters == 0 {
            if !self.settled {
                tracing::debug!(cnpj = %self.cnpj, "Registry lookup abandoned by every caller");
            }
            in_flight.remove(self.cnpj);
        }
    }
}

#[async_trait]
impl CompanyLookup for CoalescingCompanyLookup {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyProfile, LookupError> {
        let request = self.join(cnpj);
        let mut waiter = Waiter {
            in_flight: &self.in_flight,
            cnpj,
            request: request.clone(),
            settled: false,
        };

        let outcome = request.await;
        waiter.settled = true;
        outcome
    }
}
