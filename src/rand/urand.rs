//! Urandom pool - optional /dev/urandom index source via a locked, pooled buffer.

use std::fs::File;
use std::io::{self, Read};
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::{IndexSource, uniform_below};

const URANDOM: &str = "/dev/urandom";
const POOL_SIZE: usize = 64 * 1024; // 64KB

// Live pool buffer, for signal handlers that exit without running destructors.
static LIVE_POOL: AtomicPtr<u8> = AtomicPtr::new(std::ptr::null_mut());
static LIVE_LEN: AtomicUsize = AtomicUsize::new(0);

pub fn is_available() -> bool {
    std::path::Path::new(URANDOM).exists()
}

/// Emergency zero for signal handlers - minimal, async-signal-safe.
///
/// # Safety
/// Must only be called when no other thread is dropping the registered pool.
#[inline(never)]
pub unsafe fn emergency_zero() {
    let ptr = LIVE_POOL.load(Ordering::Acquire);
    let len = LIVE_LEN.load(Ordering::Acquire);
    unsafe { wipe(ptr, len) };
}

unsafe fn wipe(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    for i in 0..len {
        unsafe { std::ptr::write_volatile(ptr.add(i), 0u8) };
    }
}

/// Pool of bytes read from `/dev/urandom`, refilled once fully consumed.
///
/// The buffer is `mlock`ed where permitted and zeroized on drop. If a refill
/// fails the pool stops reading and draws come from the OS CSPRNG instead;
/// [`IndexSource::fault`] then reports why.
pub struct UrandomPool {
    file: File,
    pool: Box<[u8]>,
    read_pos: usize,
    locked: bool,
    fault: Option<String>,
}

impl UrandomPool {
    /// Open `/dev/urandom` and fill the pool.
    pub fn open() -> io::Result<Self> {
        Self::with_capacity(POOL_SIZE)
    }

    fn with_capacity(size: usize) -> io::Result<Self> {
        debug_assert!(size >= 8 && size % 8 == 0, "pool size must hold whole u64s");
        let file = File::open(URANDOM)?;
        let mut pool = vec![0u8; size].into_boxed_slice();
        let locked = unsafe { libc::mlock(pool.as_ptr() as *const libc::c_void, pool.len()) == 0 };

        LIVE_POOL.store(pool.as_mut_ptr(), Ordering::Release);
        LIVE_LEN.store(pool.len(), Ordering::Release);

        let mut this = Self {
            file,
            pool,
            read_pos: 0,
            locked,
            fault: None,
        };
        this.refill()?;
        Ok(this)
    }

    /// Whether the pool memory is pinned (not swappable).
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether draws have fallen back to the OS CSPRNG after a failed refill.
    pub fn is_degraded(&self) -> bool {
        self.fault.is_some()
    }

    fn refill(&mut self) -> io::Result<()> {
        self.file.read_exact(&mut self.pool)?;
        self.read_pos = 0;
        Ok(())
    }

    fn next_u64(&mut self) -> u64 {
        if self.fault.is_none() && self.read_pos + 8 > self.pool.len() {
            if let Err(e) = self.refill() {
                self.fault = Some(e.to_string());
            }
        }
        if self.fault.is_some() {
            return OsRng.next_u64();
        }

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.pool[self.read_pos..self.read_pos + 8]);
        self.pool[self.read_pos..self.read_pos + 8].zeroize();
        self.read_pos += 8;
        let value = u64::from_le_bytes(bytes);
        bytes.zeroize();
        value
    }
}

impl IndexSource for UrandomPool {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        uniform_below(n, || self.next_u64())
    }

    fn name(&self) -> &'static str {
        if self.is_degraded() {
            "OS CSPRNG (urandom read failed)"
        } else {
            "/dev/urandom pool"
        }
    }

    fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }
}

impl Drop for UrandomPool {
    fn drop(&mut self) {
        let _ = LIVE_POOL.compare_exchange(
            self.pool.as_mut_ptr(),
            std::ptr::null_mut(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        self.pool.zeroize();
        if self.locked {
            unsafe { libc::munlock(self.pool.as_ptr() as *const libc::c_void, self.pool.len()) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_yields_indices_in_bounds_across_refills() {
        if !is_available() {
            return;
        }
        let mut pool = UrandomPool::with_capacity(64).expect("open /dev/urandom");
        // 64 bytes = 8 draws per fill; force several refills.
        for _ in 0..100 {
            assert!(pool.next_index(88) < 88);
        }
        assert!(!pool.is_degraded());
        assert_eq!(pool.name(), "/dev/urandom pool");
        assert_eq!(pool.fault(), None);
    }

    #[test]
    fn consumed_bytes_are_wiped() {
        if !is_available() {
            return;
        }
        let mut pool = UrandomPool::with_capacity(64).expect("open /dev/urandom");
        pool.next_u64();
        pool.next_u64();
        assert!(pool.pool[..16].iter().all(|&b| b == 0));
    }

    #[test]
    fn failed_refill_falls_back_and_reports() {
        if !is_available() {
            return;
        }
        let mut pool = UrandomPool::with_capacity(64).expect("open /dev/urandom");
        pool.file = File::open("/dev/null").expect("open /dev/null");

        // 8 draws drain the pool; the refill from /dev/null then hits EOF.
        for _ in 0..20 {
            assert!(pool.next_index(88) < 88);
        }
        assert!(pool.is_degraded());
        assert_eq!(pool.name(), "OS CSPRNG (urandom read failed)");
        assert!(pool.fault().is_some());

        // No further reads are attempted once degraded.
        let pos = pool.read_pos;
        pool.next_index(10);
        assert_eq!(pool.read_pos, pos);
    }

    #[test]
    fn wipe_zeroes_the_pool_buffer() {
        if !is_available() {
            return;
        }
        let mut pool = UrandomPool::with_capacity(64).expect("open /dev/urandom");
        assert!(pool.pool.iter().any(|&b| b != 0));
        unsafe { wipe(pool.pool.as_mut_ptr(), pool.pool.len()) };
        assert!(pool.pool.iter().all(|&b| b == 0));
    }

    #[test]
    fn wipe_ignores_null() {
        unsafe { wipe(std::ptr::null_mut(), 64) };
    }
}
