//! Integer identifiers. Each is allocated by a counter on its owner,
//! starting at 1.

pub type ProjectId = u32;
pub type BoardId = u32;
pub type TaskId = u32;
pub type SubtaskId = u32;
pub type UserId = u32;

pub(crate) const FIRST_ID: u32 = 1;

/// Hands out `*next` and advances it.
///
/// The counter saturates at `u32::MAX`. Once that id is taken, the lowest
/// id not in use is returned instead.
pub(crate) fn allocate_id(next: &mut u32, in_use: impl Fn(u32) -> bool) -> u32 {
    if in_use(*next)
        && let Some(free) = (FIRST_ID..u32::MAX).find(|&id| !in_use(id))
    {
        return free;
    }
    let id = *next;
    *next = next.saturating_add(1);
    id
}

/// Moves the counter past an id that arrived from outside.
pub(crate) fn reserve_id(next: &mut u32, id: u32) {
    *next = (*next).max(id.saturating_add(1));
}
