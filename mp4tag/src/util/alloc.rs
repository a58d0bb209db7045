use crate::error::Result;
use crate::macros::err;

use crate::config::global_options;

/// **DO NOT USE DIRECTLY**
///
/// Creates a `Vec` of the specified length, containing copies of `element`.
///
/// The length is checked against [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit)
/// before anything is reserved, since atom sizes come straight from untrusted input.
///
/// This should be used through [`try_vec!`](crate::macros::try_vec)
pub(crate) fn fallible_vec_from_element<T>(element: T, expected_size: usize) -> Result<Vec<T>>
where
	T: Clone,
{
	if expected_size == 0 {
		return Ok(Vec::new());
	}

	if expected_size > global_options().allocation_limit {
		err!(TooMuchData);
	}

	let mut ret = Vec::new();
	ret.try_reserve_exact(expected_size)?;
	ret.resize(expected_size, element);

	Ok(ret)
}
