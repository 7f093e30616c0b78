/// Build a new mapping by transforming every `(key, value)` entry
///
/// `f` runs once per entry, in the source's iteration order, and each pair it
/// returns is inserted into a fresh mapping of the caller's choosing. Pass
/// `&map` to transform borrowed entries and leave the source untouched.
///
/// If `f` yields the same key twice the later entry wins; callers should keep
/// `f` injective on keys.
pub fn map_object<I, K, V, NK, NV, M, F>(entries: I, f: F) -> M
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut((K, V)) -> (NK, NV),
    M: FromIterator<(NK, NV)>,
{
    entries.into_iter().map(f).collect()
}
