use subseq::{FieldTrace, ResolveVerbose};

/// Maximum number of indices printed with `--indices`.
const INDEX_PREVIEW: usize = 32;

/// What a piece of report text shows; each role maps to one SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Title,
    Section,
    FieldName,
    RawField,
    Resolved,
    Failure,
    Count,
    Indices,
    Muted,
}

impl Role {
    fn sgr(self) -> &'static str {
        match self {
            Role::Title => "1;36",
            Role::Section => "90",
            Role::FieldName => "34",
            Role::RawField => "33",
            Role::Resolved => "1;32",
            Role::Failure => "1;31",
            Role::Count => "33",
            Role::Indices => "34",
            Role::Muted => "2",
        }
    }
}

/// Wraps text in SGR escapes when color output is enabled.
struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn style(&self, text: impl AsRef<str>, role: Role) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", role.sgr(), text.as_ref())
        } else {
            text.as_ref().to_string()
        }
    }

    fn section(&self, title: &str) -> String {
        self.style(format!("━━━ {title} ━━━"), Role::Section)
    }
}

pub fn print_run(res: &ResolveVerbose, strict: bool, show_indices: bool, color: bool) {
    let palette = Palette::new(color);
    let mode = if strict { "strict" } else { "clamping" };
    println!(
        "\n{}{}",
        palette.style(format!("⚙  Resolving: \"{}\"", res.text), Role::Title),
        palette.style(format!("  (length {}, {mode})", res.length), Role::Muted),
    );

    println!("\n{}", palette.section("Fields"));
    if res.details.fields.is_empty() {
        println!("{}", palette.style("  No fields settled", Role::Muted));
    }
    for field in &res.details.fields {
        println!("  {}", fmt_field(field, &palette));
    }

    println!("\n{}", palette.section("Result"));
    match &res.result {
        Ok(slice) => {
            println!(
                "  {} {} {}",
                palette.style(slice.to_string(), Role::Resolved),
                palette.style("│", Role::Muted),
                palette.style(format!("{} selected", slice.len()), Role::Count),
            );
            if show_indices {
                print_indices(slice.indices(), slice.len(), &palette);
            }
        }
        Err(err) => {
            println!(
                "  {} {} {}",
                palette.style(err.kind().as_str(), Role::Failure),
                palette.style("│", Role::Muted),
                err
            );
        }
    }

    println!("\n{}", palette.section("Timing"));
    println!("  Total: {}", palette.style(format!("{:?}", res.details.elapsed), Role::Count));
    println!();
}

fn print_indices(indices: impl Iterator<Item = usize>, total: usize, palette: &Palette) {
    let shown: Vec<String> = indices.take(INDEX_PREVIEW).map(|i| i.to_string()).collect();
    if shown.is_empty() {
        println!("  {}", palette.style("(empty)", Role::Muted));
        return;
    }
    println!("  {}", palette.style(format!("[{}]", shown.join(", ")), Role::Indices));
    if total > shown.len() {
        println!("  {}", palette.style(format!("... +{} more", total - shown.len()), Role::Muted));
    }
}

fn fmt_field(field: &FieldTrace, palette: &Palette) -> String {
    let raw = match &field.raw {
        Some(raw) => palette.style(format!("`{raw}`"), Role::RawField),
        None => palette.style("(default)", Role::Muted),
    };
    let resolved = match field.resolved {
        Some(value) => value.to_string(),
        None => "unbounded".to_string(),
    };

    let name = palette.style(format!("{:<5}", field.field.as_str()), Role::FieldName);
    let mut line = format!("{} {} {} {}", name, raw, palette.style("→", Role::Muted), resolved);
    if field.clamped {
        let evaluated = field.evaluated.map(|v| v.to_string()).unwrap_or_default();
        line.push_str(&palette.style(format!("  (clamped from {evaluated})"), Role::Muted));
    }
    line
}
