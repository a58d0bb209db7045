macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(Mp4TagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)        -> return Err(Mp4TagError::new(ErrorKind::Variant))
// - err!(Variant(Value)) -> return Err(Mp4TagError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Mp4TagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::Mp4TagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use {err, try_vec};
