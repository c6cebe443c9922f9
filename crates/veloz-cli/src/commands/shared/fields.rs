use veloz_view::FormError;

/// Feed the values given on the command line into a form, in field order.
///
/// Stops at the first rejected field. Returns how many fields were set.
pub fn apply_fields<F>(fields: &[(&'static str, Option<&str>)], mut set: F) -> Result<usize, FormError>
where
    F: FnMut(&'static str, &str) -> Result<(), FormError>,
{
    let mut applied = 0;
    for &(name, value) in fields {
        if let Some(value) = value {
            set(name, value)?;
            applied += 1;
        }
    }
    Ok(applied)
}
