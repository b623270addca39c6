//! Tailwind-aware class list merging.

use std::collections::HashSet;

/// Utility prefixes with their own conflict group, longest first so that
/// `px-2` is not read as `p` with value `x-2`.
const PREFIX_GROUPS: &[&str] = &[
    "overflow-x",
    "overflow-y",
    "rounded-tl",
    "rounded-tr",
    "rounded-bl",
    "rounded-br",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "tracking",
    "overflow",
    "opacity",
    "rounded",
    "leading",
    "justify",
    "inset-x",
    "inset-y",
    "border",
    "cursor",
    "bottom",
    "shadow",
    "max-w",
    "max-h",
    "min-w",
    "min-h",
    "gap-x",
    "gap-y",
    "inset",
    "items",
    "right",
    "left",
    "font",
    "text",
    "size",
    "top",
    "gap",
    "px",
    "py",
    "pt",
    "pr",
    "pb",
    "pl",
    "mx",
    "my",
    "mt",
    "mr",
    "mb",
    "ml",
    "bg",
    "z",
    "p",
    "m",
    "w",
    "h",
];

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const BG_SIZES: &[&str] = &["auto", "cover", "contain"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Merge class fragments into one `class` attribute value.
///
/// Fragments are split on whitespace and empty ones are dropped. When two
/// Tailwind utilities from the same group carry the same variants (`hover:`,
/// `md:` and so on), the later one wins, so `cn(["px-2", "px-4"])` is `"px-4"`.
/// A shorthand also removes earlier longhands it covers: `p-4` drops an earlier
/// `px-2`. Anything that is not a known utility is only de-duplicated, keeping
/// its last position.
///
/// ```
/// use storefront_ui::cn;
///
/// assert_eq!(cn(["px-2 py-1 bg-red-500", "px-4 bg-blue-500"]), "py-1 px-4 bg-blue-500");
/// ```
pub fn cn<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fragments: Vec<String> = classes
        .into_iter()
        .flat_map(|fragment| {
            fragment
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    let mut taken: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(fragments.len());

    for class in fragments.iter().rev() {
        let key = match conflict_key(class) {
            Some((scope, group)) => {
                let key = format!("{scope}{group}");
                if taken.contains(&key) {
                    continue;
                }
                for covered in covered_groups(group) {
                    taken.insert(format!("{scope}{covered}"));
                }
                key
            }
            None => format!("={class}"),
        };

        if taken.insert(key) {
            kept.push(class.as_str());
        }
    }

    kept.reverse();
    kept.join(" ")
}

/// `(variant scope, group)` for a Tailwind utility, `None` for other classes.
///
/// The scope keeps variants and the `!` modifier so that `hover:p-2` and `p-2`
/// never conflict.
fn conflict_key(class: &str) -> Option<(&str, &'static str)> {
    let split = variant_split(class);
    let (scope, utility) = class.split_at(split);
    let base = utility.trim_start_matches('!').trim_start_matches('-');
    let important = &utility[..utility.len() - utility.trim_start_matches('!').len()];
    let scope_len = scope.len() + important.len();

    group_of(base).map(|group| (&class[..scope_len], group))
}

/// Byte offset just past the last variant separator outside `[...]`.
fn variant_split(class: &str) -> usize {
    let mut depth = 0usize;
    let mut split = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = i + 1,
            _ => {}
        }
    }
    split
}

fn group_of(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    if FLEX_DIRECTION.contains(&base) {
        return Some("flex-direction");
    }

    let (prefix, value) = PREFIX_GROUPS.iter().find_map(|prefix| {
        if base == *prefix {
            Some((*prefix, ""))
        } else {
            base.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .map(|value| (*prefix, value))
        }
    })?;

    let group = match prefix {
        "text" if TEXT_SIZES.contains(&value) => "text-size",
        "text" if TEXT_ALIGN.contains(&value) => "text-align",
        "text" => "text-color",
        "font" if FONT_WEIGHTS.contains(&value) => "font-weight",
        "font" => "font-family",
        "bg" if BG_SIZES.contains(&value) => "bg-size",
        "bg" => "bg-color",
        "border" if value.is_empty() || value.bytes().all(|b| b.is_ascii_digit()) => {
            "border-width"
        }
        "border" if BORDER_STYLES.contains(&value) => "border-style",
        // Side widths like `border-t-2` are left alone
        "border" if is_border_side(value) => return None,
        "border" => "border-color",
        "shadow" if is_shadow_size(value) => "shadow-size",
        "shadow" => "shadow-color",
        other => other,
    };
    Some(group)
}

fn is_border_side(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some('t' | 'r' | 'b' | 'l' | 'x' | 'y' | 's' | 'e'))
        && matches!(chars.next(), None | Some('-'))
}

fn is_shadow_size(value: &str) -> bool {
    value.is_empty() || value.starts_with('[') || SHADOW_SIZES.contains(&value)
}

/// Groups a shorthand overrides in addition to its own.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "size" => &["w", "h"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-bl",
            "rounded-br",
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_and_skips_empty() {
        assert_eq!(cn(["btn", "", "  ", "btn-primary"]), "btn btn-primary");
        assert_eq!(cn(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_conditional_fragments() {
        let active = false;
        let classes = [Some("btn"), active.then_some("btn-active"), Some("rounded")];
        assert_eq!(cn(classes.into_iter().flatten()), "btn rounded");
    }

    #[test]
    fn test_later_utility_wins() {
        assert_eq!(cn(["px-2 py-1", "px-4"]), "py-1 px-4");
        assert_eq!(cn(["bg-red-500", "bg-blue-500"]), "bg-blue-500");
        assert_eq!(cn(["text-sm", "text-lg"]), "text-lg");
        assert_eq!(cn(["font-bold", "font-medium"]), "font-medium");
        assert_eq!(cn(["block", "flex"]), "flex");
        assert_eq!(cn(["shadow", "shadow-lg"]), "shadow-lg");
        assert_eq!(cn(["shadow-red-500", "shadow-black/20"]), "shadow-black/20");
    }

    #[test]
    fn test_different_groups_are_kept() {
        assert_eq!(cn(["text-sm", "text-red-500"]), "text-sm text-red-500");
        assert_eq!(cn(["text-center", "text-lg"]), "text-center text-lg");
        assert_eq!(cn(["border", "border-gray-200"]), "border border-gray-200");
        assert_eq!(cn(["border-t-2", "border-2"]), "border-t-2 border-2");
        assert_eq!(cn(["border-red-500", "border-transparent"]), "border-transparent");
        assert_eq!(cn(["font-mono", "font-bold"]), "font-mono font-bold");
        assert_eq!(cn(["shadow-lg", "shadow-red-500"]), "shadow-lg shadow-red-500");
    }

    #[test]
    fn test_shorthand_overrides_longhand() {
        assert_eq!(cn(["px-2 pt-1", "p-4"]), "p-4");
        // The longhand coming later refines the shorthand
        assert_eq!(cn(["p-4", "px-2"]), "p-4 px-2");
    }

    #[test]
    fn test_variants_scope_conflicts() {
        assert_eq!(
            cn(["bg-white hover:bg-gray-100", "bg-black"]),
            "hover:bg-gray-100 bg-black"
        );
        assert_eq!(cn(["md:px-2", "md:px-6"]), "md:px-6");
        assert_eq!(cn(["!px-2", "px-4"]), "!px-2 px-4");
    }

    #[test]
    fn test_negative_and_arbitrary_values() {
        assert_eq!(cn(["-mt-2", "mt-4"]), "mt-4");
        assert_eq!(cn(["w-[calc(100%-2rem)]", "w-full"]), "w-full");
        assert_eq!(cn(["[&>svg]:w-4", "[&>svg]:w-6"]), "[&>svg]:w-6");
    }

    #[test]
    fn test_unknown_classes_deduplicate_keeping_last() {
        assert_eq!(cn(["card shadow-sm", "card"]), "shadow-sm card");
        assert_eq!(cn(["pointer-events-none", "pointer-events-none"]), "pointer-events-none");
    }
}
