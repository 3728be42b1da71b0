// crates/cli/src/utils.rs

const SIZE_SUFFIXES: &[(char, u32)] = &[('k', 10), ('m', 20), ('g', 30)];

pub(crate) fn parse_suffixed<T>(s: &str, shifts: &[(char, u32)]) -> std::result::Result<T, String>
where
    T: TryFrom<u64>,
{
    let s = s.trim();
    if let Some(last) = s.chars().last() {
        if last.is_ascii_alphabetic() {
            let num = s[..s.len() - 1].parse::<u64>().map_err(|e| e.to_string())?;
            let shift = shifts
                .iter()
                .find(|(c, _)| last.eq_ignore_ascii_case(c))
                .map(|(_, s)| *s)
                .ok_or_else(|| format!("invalid size suffix: {last}"))?;
            let val = num
                .checked_mul(1u64 << shift)
                .ok_or_else(|| "size overflow".to_string())?;
            return T::try_from(val).map_err(|_| "size overflow".to_string());
        }
    }
    let val = s.parse::<u64>().map_err(|e| e.to_string())?;
    T::try_from(val).map_err(|_| "size overflow".to_string())
}

pub(crate) fn parse_size<T>(s: &str) -> std::result::Result<T, String>
where
    T: TryFrom<u64>,
{
    parse_suffixed(s, SIZE_SUFFIXES)
}

pub(crate) fn parse_block_size(s: &str) -> std::result::Result<usize, String> {
    let size = parse_size::<usize>(s)?;
    if size == 0 {
        Err("value must be greater than 0".into())
    } else {
        Ok(size)
    }
}
