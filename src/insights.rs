//! Observability: structured tracing, zero-cost when the `tracing`
//! feature is disabled.

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record_send(prio: u32, size: usize) {
    let _span = tracing::trace_span!("send", prio, size).entered();
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn record_send(_prio: u32, _size: usize) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record_recv(prio: u32, size: usize) {
    let _span = tracing::trace_span!("recv", prio, size).entered();
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn record_recv(_prio: u32, _size: usize) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record_try_again(op: &'static str) {
    let _span = tracing::debug_span!("try_again", op).entered();
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn record_try_again(_op: &'static str) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record_timeout(op: &'static str) {
    let _span = tracing::debug_span!("timeout", op).entered();
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn record_timeout(_op: &'static str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_hooks_compile_and_run() {
        record_send(1, 4);
        record_recv(1, 4);
        record_try_again("send");
        record_timeout("recv");
    }
}
