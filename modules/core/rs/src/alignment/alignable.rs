// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

/// Sequence of symbols that can be aligned: ordered, indexable, and read-only.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T: Copy> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// Strings are aligned byte by byte.
impl Alignable for str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

impl Alignable for String {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

impl<A: Alignable + ?Sized> Alignable for &A {
    type Symbol = A::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        (**self).at(pos)
    }
}
