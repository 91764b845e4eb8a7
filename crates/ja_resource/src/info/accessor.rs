use alloc::sync::Arc;
use core::fmt;

use crate::FieldValue;

type GetFn<R> = dyn (Fn(&R) -> &dyn FieldValue) + Send + Sync;
type GetMutFn<R> = dyn (Fn(&mut R) -> &mut dyn FieldValue) + Send + Sync;
type SwapFn<R> = dyn Fn(&mut R, &mut R) + Send + Sync;

// Pin the higher-ranked signature that closure inference can't derive alone.
#[inline(always)]
fn getter<R, F: Fn(&R) -> &dyn FieldValue>(f: F) -> F {
    f
}

#[inline(always)]
fn getter_mut<R, F: Fn(&mut R) -> &mut dyn FieldValue>(f: F) -> F {
    f
}

/// Reads, writes and swaps one field of `R` without knowing its type.
///
/// Accessors of embedded types are composed with [`FieldAccessor::nest`], so
/// a flattened field is reached through its whole path.
pub struct FieldAccessor<R> {
    get: Arc<GetFn<R>>,
    get_mut: Arc<GetMutFn<R>>,
    swap: Arc<SwapFn<R>>,
}

impl<R: 'static> FieldAccessor<R> {
    /// Accessor for a field of type `T` reached by `get` and `get_mut`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ja_resource::info::FieldAccessor;
    ///
    /// struct Pair { left: u8, right: u8 }
    ///
    /// let left = FieldAccessor::<Pair>::new::<u8>(|p| &p.left, |p| &mut p.left);
    /// let mut a = Pair { left: 1, right: 0 };
    /// let mut b = Pair { left: 2, right: 0 };
    ///
    /// left.swap(&mut a, &mut b);
    /// assert_eq!((a.left, b.left), (2, 1));
    /// assert_eq!(left.get(&a).as_any().downcast_ref::<u8>(), Some(&2));
    /// ```
    pub fn new<T: FieldValue>(get: fn(&R) -> &T, get_mut: fn(&mut R) -> &mut T) -> Self {
        Self {
            get: Arc::new(getter(move |r: &R| get(r) as &dyn FieldValue)),
            get_mut: Arc::new(getter_mut(move |r: &mut R| get_mut(r) as &mut dyn FieldValue)),
            swap: Arc::new(move |a: &mut R, b: &mut R| core::mem::swap(get_mut(a), get_mut(b))),
        }
    }

    /// Lifts this accessor onto an outer type `P` that embeds `R`.
    pub fn nest<P: 'static>(&self, outer: fn(&P) -> &R, outer_mut: fn(&mut P) -> &mut R) -> FieldAccessor<P> {
        let get = Arc::clone(&self.get);
        let get_mut = Arc::clone(&self.get_mut);
        let swap = Arc::clone(&self.swap);

        FieldAccessor {
            get: Arc::new(getter(move |p: &P| get(outer(p)))),
            get_mut: Arc::new(getter_mut(move |p: &mut P| get_mut(outer_mut(p)))),
            swap: Arc::new(move |a: &mut P, b: &mut P| swap(outer_mut(a), outer_mut(b))),
        }
    }

    #[inline]
    pub fn get<'a>(&self, record: &'a R) -> &'a dyn FieldValue {
        (self.get)(record)
    }

    #[inline]
    pub fn get_mut<'a>(&self, record: &'a mut R) -> &'a mut dyn FieldValue {
        (self.get_mut)(record)
    }

    /// Exchanges this field's value between two records.
    #[inline]
    pub fn swap(&self, a: &mut R, b: &mut R) {
        (self.swap)(a, b);
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            get_mut: Arc::clone(&self.get_mut),
            swap: Arc::clone(&self.swap),
        }
    }
}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldAccessor")
    }
}

#[cfg(test)]
mod tests {
    use super::FieldAccessor;
    use alloc::string::String;
    use std::thread;

    #[derive(Default)]
    struct Address {
        city: String,
    }

    #[derive(Default)]
    struct Person {
        address: Address,
    }

    #[test]
    fn nested_accessor_crosses_threads() {
        let city = FieldAccessor::<Address>::new::<String>(|a| &a.city, |a| &mut a.city);
        let city = city.nest::<Person>(|p| &p.address, |p| &mut p.address);

        let handle = thread::spawn(move || {
            let mut a = Person::default();
            let mut b = Person {
                address: Address { city: String::from("Paris") },
            };
            city.swap(&mut a, &mut b);
            city.get_mut(&mut b).assign_json(r#""Oslo""#).unwrap();
            (a.address.city, b.address.city)
        });

        assert_eq!(handle.join().unwrap(), (String::from("Paris"), String::from("Oslo")));
    }
}
