//! Reassembly of sliced binary payloads.

/// Concatenate `buffers` in order into one newly allocated buffer.
pub fn join_array_buffers<B: AsRef<[u8]>>(buffers: &[B]) -> Vec<u8> {
    let size = buffers.iter().map(|b| b.as_ref().len()).sum();
    let mut joined = Vec::with_capacity(size);
    for buffer in buffers {
        joined.extend_from_slice(buffer.as_ref());
    }
    joined
}
