//! Process-wide descriptor cache.

use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use alloc::boxed::Box;
use ja_utils::TypeIdMap;

use crate::Resource;
use crate::info::TypeDescriptor;

type Erased = &'static (dyn Any + Send + Sync);

static DESCRIPTORS: RwLock<TypeIdMap<Erased>> = RwLock::new(TypeIdMap::new());

/// Returns the descriptor of `R`, building it on first use.
///
/// Readers share the lock. A miss builds outside of any lock and publishes
/// under the write lock; when two threads race, the first published
/// descriptor is kept and the other build is dropped.
pub(crate) fn descriptor<R: Resource>() -> &'static TypeDescriptor<R> {
    let type_id = TypeId::of::<R>();
    let erased = match lookup(type_id) {
        Some(erased) => erased,
        None => publish(type_id, build::<R>()),
    };

    match erased.downcast_ref::<TypeDescriptor<R>>() {
        Some(descriptor) => descriptor,
        None => unreachable!("descriptor cache entry of {} has a foreign type", R::type_ident()),
    }
}

#[inline(never)]
fn lookup(type_id: TypeId) -> Option<Erased> {
    DESCRIPTORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .copied()
}

fn build<R: Resource>() -> Box<dyn Any + Send + Sync> {
    let descriptor = TypeDescriptor::<R>::build();
    log::debug!(
        "built descriptor for {} as {:?} ({} fields)",
        R::type_ident(),
        descriptor.resource_type(),
        descriptor.fields().len(),
    );
    Box::new(descriptor)
}

#[inline(never)]
fn publish(type_id: TypeId, built: Box<dyn Any + Send + Sync>) -> Erased {
    let mut map = DESCRIPTORS.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = map.get(&type_id) {
        log::trace!("descriptor published concurrently, dropping redundant build");
        return *existing;
    }
    *map.get_or_insert(type_id, || &*Box::leak(built))
}

/// Number of cached descriptors.
#[cfg(test)]
pub(crate) fn len() -> usize {
    DESCRIPTORS.read().unwrap_or_else(PoisonError::into_inner).len()
}

#[cfg(test)]
mod tests {
    use crate::Resource;
    use crate::derive::Resource;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::thread;

    #[derive(Resource, Default)]
    struct Racer {
        #[jsonapi(id = "racers")]
        id: u64,
        #[jsonapi(attr)]
        name: String,
    }

    #[derive(Resource, Default)]
    struct Other {
        #[jsonapi(id)]
        id: u64,
    }

    #[test]
    fn same_descriptor_across_threads() {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| Racer::descriptor() as *const _ as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let local = Racer::descriptor() as *const _ as usize;
        assert!(addresses.iter().all(|addr| *addr == local));
        assert_eq!(Racer::descriptor().resource_type(), "racers");
    }

    #[test]
    fn distinct_types_distinct_entries() {
        let racer = Racer::descriptor();
        let other = Other::descriptor();
        assert_eq!(other.resource_type(), "other");
        assert_eq!(racer.resource_type(), "racers");
        assert!(super::len() >= 2);
    }
}
