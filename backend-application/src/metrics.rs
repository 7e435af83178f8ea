use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    scan_requests: AtomicU64,
    scan_found: AtomicU64,
    scan_failed: AtomicU64,
    scan_discarded: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_scan_found(&self) {
        self.scan_requests.fetch_add(1, Ordering::Relaxed);
        self.scan_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan_failed(&self) {
        self.scan_requests.fetch_add(1, Ordering::Relaxed);
        self.scan_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_scan_discarded(&self) {
        self.scan_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.scan_requests.load(Ordering::Relaxed);
        let found = self.scan_found.load(Ordering::Relaxed);
        let failed = self.scan_failed.load(Ordering::Relaxed);
        let discarded = self.scan_discarded.load(Ordering::Relaxed);
        let store_errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE palco_scan_requests_total counter\n\
palco_scan_requests_total {}\n\
# TYPE palco_scan_found_total counter\n\
palco_scan_found_total {}\n\
# TYPE palco_scan_failed_total counter\n\
palco_scan_failed_total {}\n\
# TYPE palco_scan_discarded_total counter\n\
palco_scan_discarded_total {}\n\
# TYPE palco_store_errors_total counter\n\
palco_store_errors_total {}\n",
            requests, found, failed, discarded, store_errors
        )
    }
}
