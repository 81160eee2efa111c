use std::process::Child;

/// Background children the interpreter still holds a handle to.
///
/// The table is bounded: when it is full even after reaping, the new child
/// keeps running but is no longer tracked.
pub struct JobTable {
    jobs: Vec<Child>,
    capacity: usize,
}

impl JobTable {
    pub fn new(capacity: usize) -> Self {
        JobTable {
            jobs: Vec::new(),
            capacity,
        }
    }

    pub fn add(&mut self, child: Child) {
        self.reap();
        if self.jobs.len() < self.capacity {
            log::debug!("tracking background job {}", child.id());
            self.jobs.push(child);
        } else {
            log::warn!(
                "job table full ({} jobs), pid {} left untracked",
                self.capacity,
                child.id()
            );
        }
    }

    /// Polls every tracked child without blocking and drops the finished ones.
    /// Returns how many were reaped.
    pub fn reap(&mut self) -> usize {
        let before = self.jobs.len();
        self.jobs.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("background job {} finished: {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                log::warn!("lost track of background job {}: {}", child.id(), e);
                false
            }
        });
        before - self.jobs.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
