use std::fmt::Display;

pub fn pad<T>(s: &T, max_size: usize, right: bool) -> String
where
    T: Display,
{
    if right {
        format!("{:<width$}", s, width = max_size)
    } else {
        format!("{:>width$}", s, width = max_size)
    }
}

pub fn pad_with<T: Clone>(v: &mut Vec<T>, el: T, max_size: usize, right: bool) {
    if let Some(additional) = max_size.checked_sub(v.len()) {
        if additional == 0 {
            return;
        }

        let plus = std::iter::repeat(el).take(additional);

        if right {
            v.extend(plus);
        } else {
            let _ = v.splice(..0, plus);
        }
    }
}

pub fn remove<T>(vec: &mut Vec<T>, what: &T)
where
    T: PartialEq,
{
    vec.retain(|x| x != what);
}

pub fn transpose<T: Clone>(input: &[Vec<T>]) -> Result<Vec<Vec<T>>, String> {
    if input.is_empty() {
        return Ok(vec![]);
    }

    let sizes: Vec<_> = input.iter().map(Vec::len).collect();
    let min_size = sizes.iter().min().unwrap_or(&0);
    let max_size = sizes.iter().max().unwrap_or(&0);

    if min_size != max_size {
        return Err(format!("Jagged matrix: {} vs {}", min_size, max_size));
    }

    Ok((0..input[0].len())
        .map(|j| input.iter().map(|row| row[j].clone()).collect())
        .collect())
}

pub mod rc {
    use std::{
        cell::{Ref, RefCell, RefMut},
        rc::Rc,
    };

    pub type ReadRc<T> = Rc<T>;
    pub type ReadRef<'a, T> = Ref<'a, T>;
    pub type MutRef<'a, T> = RefMut<'a, T>;

    /// Shared handle with interior mutability for the single-owner
    /// editing session: the session writes, the renderer reads.
    #[derive(Debug)]
    pub struct MutRc<T>(ReadRc<RefCell<T>>);

    impl<T> MutRc<T> {
        pub fn new(data: T) -> Self {
            Self(ReadRc::new(RefCell::new(data)))
        }

        pub fn read(&self) -> ReadRef<'_, T> {
            self.0.borrow()
        }

        pub fn write(&self) -> MutRef<'_, T> {
            self.0.borrow_mut()
        }
    }

    impl<T> Clone for MutRc<T> {
        fn clone(&self) -> Self {
            Self(ReadRc::clone(&self.0))
        }
    }
}
