//! Sample-value factories consumed by the contract checks.

/// Produces the sample values a contract check compares.
///
/// Every call to [`primary`](Instances::primary) must build a new,
/// independently constructed value that equals every other primary value.
/// [`secondary`](Instances::secondary) must build a value that equals no
/// primary value.
pub trait Instances<T> {
    /// A fresh primary instance.
    fn primary(&self) -> T;

    /// A fresh instance unequal to any primary instance.
    fn secondary(&self) -> T;

    /// Whether `a` and `b` are the same object rather than two equal ones.
    ///
    /// The default compares the addresses of `a` and `b`. The checks always
    /// pass two separately bound values, so for them the default never
    /// reports the same instance. Zero-sized values may share an address
    /// without being the same object and are never treated as one.
    ///
    /// Factories that hand out handles (`Rc<_>`, `Arc<_>`, `&'static _`)
    /// must override this and compare what the handles point to
    /// (`Rc::ptr_eq`, `Arc::ptr_eq`, `std::ptr::eq(*a, *b)`). Without the
    /// override, a factory reusing one handle goes undetected.
    fn same_instance(&self, a: &T, b: &T) -> bool {
        same_address(a, b)
    }

    /// The value standing in for `null`, if the type has one.
    ///
    /// `None` means the type cannot express absence, so no instance can
    /// equal it.
    fn absent(&self) -> Option<T> {
        None
    }
}

fn same_address<T>(a: &T, b: &T) -> bool {
    std::mem::size_of::<T>() != 0 && std::ptr::eq(a, b)
}

type Producer<'a, T> = Box<dyn Fn() -> T + 'a>;
type Identity<'a, T> = Box<dyn Fn(&T, &T) -> bool + 'a>;

/// An [`Instances`] implementation backed by closures.
///
/// ```rust
/// use value_objects::{EqualityTests, FnInstances};
///
/// let instances = FnInstances::new(|| String::from("left"), || String::from("right"));
/// EqualityTests.verify_equals_and_hashcode(&instances).unwrap();
/// ```
pub struct FnInstances<'a, T> {
    primary: Producer<'a, T>,
    secondary: Producer<'a, T>,
    absent: Option<Producer<'a, T>>,
    identity: Option<Identity<'a, T>>,
}

impl<'a, T> FnInstances<'a, T> {
    pub fn new(primary: impl Fn() -> T + 'a, secondary: impl Fn() -> T + 'a) -> Self {
        Self {
            primary: Box::new(primary),
            secondary: Box::new(secondary),
            absent: None,
            identity: None,
        }
    }

    /// Supply the value that plays the role of `null`.
    pub fn with_absent(mut self, absent: impl Fn() -> T + 'a) -> Self {
        self.absent = Some(Box::new(absent));
        self
    }

    /// Override how reference identity is decided.
    pub fn with_identity(mut self, identity: impl Fn(&T, &T) -> bool + 'a) -> Self {
        self.identity = Some(Box::new(identity));
        self
    }
}

impl<T> Instances<T> for FnInstances<'_, T> {
    fn primary(&self) -> T {
        (self.primary)()
    }

    fn secondary(&self) -> T {
        (self.secondary)()
    }

    fn same_instance(&self, a: &T, b: &T) -> bool {
        match &self.identity {
            Some(identity) => identity(a, b),
            None => same_address(a, b),
        }
    }

    fn absent(&self) -> Option<T> {
        self.absent.as_ref().map(|absent| absent())
    }
}

impl<T> std::fmt::Debug for FnInstances<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnInstances")
            .field("has_absent", &self.absent.is_some())
            .field("has_identity", &self.identity.is_some())
            .finish()
    }
}
