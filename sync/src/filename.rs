//! Sprite filename parsing
//!
//! Accepted shapes:
//!
//! - `25.6.png` base sprite
//! - `25.6a.png` lettered alternative
//! - `25.6_shiny.png` named variant

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FusionSprite {
    pub head_id: u32,
    pub body_id: u32,
    pub variant: Option<String>,
}

impl FusionSprite {
    pub fn is_base(&self) -> bool {
        self.variant.is_none()
    }

    pub fn pair(&self) -> (u32, u32) {
        (self.head_id, self.body_id)
    }
}

fn split_number(s: &str) -> Option<(u32, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let number = s[..end].parse().ok()?;
    Some((number, &s[end..]))
}

fn parse_variant(rest: &str) -> Option<Option<String>> {
    if rest.is_empty() {
        return Some(None);
    }

    if let Some(name) = rest.strip_prefix('_') {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        return valid.then(|| Some(name.to_string()));
    }

    rest.chars()
        .all(|c| c.is_ascii_lowercase())
        .then(|| Some(rest.to_string()))
}

/// Parse a sprite filename, None when it matches no accepted shape
pub fn parse_sprite_filename(name: &str) -> Option<FusionSprite> {
    let stem = name.strip_suffix(".png")?;
    let (head_id, rest) = split_number(stem)?;
    let rest = rest.strip_prefix('.')?;
    let (body_id, rest) = split_number(rest)?;
    let variant = parse_variant(rest)?;

    Some(FusionSprite {
        head_id,
        body_id,
        variant,
    })
}
