//! Animator that never advances on its own.

use slotline::{AnimationHandle, Animator, SnapAnimation};

/// Records snap requests and hands out sequential handles.
///
/// Completion is driven by the test through [`finish_all`](Self::finish_all)
/// or by forwarding a handle from [`pending`](Self::pending) directly.
#[derive(Debug, Default)]
pub struct ManualAnimator {
    next_handle: u64,
    pending: Vec<(AnimationHandle, SnapAnimation)>,
    started: usize,
}

impl ManualAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snaps requested and not yet finished, oldest first.
    pub fn pending(&self) -> &[(AnimationHandle, SnapAnimation)] {
        &self.pending
    }

    /// Most recent snap request.
    pub fn last(&self) -> Option<&SnapAnimation> {
        self.pending.last().map(|(_, snap)| snap)
    }

    /// Total number of snaps ever requested.
    pub fn started(&self) -> usize {
        self.started
    }

    /// Finish every pending snap, returning their handles oldest first.
    pub fn finish_all(&mut self) -> Vec<AnimationHandle> {
        self.pending.drain(..).map(|(handle, _)| handle).collect()
    }
}

impl Animator for ManualAnimator {
    fn animate(&mut self, snap: SnapAnimation) -> AnimationHandle {
        let handle = AnimationHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.started += 1;
        self.pending.push((handle, snap));
        handle
    }
}
