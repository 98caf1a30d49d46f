//! Demo command handlers. Each returns true on success.

pub fn void() -> bool {
    println!("void()");
    true
}

pub fn cat_byte(value: u8) -> bool {
    println!("cat_byte: {value}");
    true
}

pub fn cat_string(s: &str) -> bool {
    println!("cat_string: {s}");
    true
}

pub fn cat_bytes(data: &[u8], count: u8) -> bool {
    println!("cat_bytes ({count}): {data:02X?}");
    true
}

#[allow(clippy::too_many_arguments)]
pub fn cat_mixed(
    u8a1: &[u8],
    u8a2: &[u8],
    s1: &str,
    s2: &str,
    u8a3: &[u8],
    i64v: i64,
    u32v: u32,
) -> bool {
    println!("cat_mixed: {u8a1:02X?} {u8a2:02X?} {s1} {s2} {u8a3:02X?} {i64v} {u32v}");
    true
}

pub fn set_speed(speed: u32) -> bool {
    println!("set_speed: {speed}");
    true
}

pub fn set_level(level: i16, enabled: bool) -> bool {
    println!("set_level: {level} (enabled: {enabled})");
    true
}
