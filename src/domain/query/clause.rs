use std::fmt;

/// `<column> not in (<values>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub column: &'static str,
    pub values: &'static [u32],
}

impl Exclusion {
    pub const fn new(column: &'static str, values: &'static [u32]) -> Self {
        Self { column, values }
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not in (", self.column)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

/// Held records are never counted
pub const HELD_EXCLUSION: Exclusion = Exclusion::new("held", &[1]);

/// One `select count(*)` branch of the union.
///
/// Everything that differs between sources lives here so the rendered
/// clauses cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountClause {
    /// Literal tag selected as `cat`
    pub label: &'static str,
    pub table: &'static str,
    /// Column compared against the store code
    pub store_column: &'static str,
    /// Applied in order, after the `sbs_no` predicate
    pub exclusions: &'static [Exclusion],
}

pub const INVOICES: CountClause = CountClause {
    label: "Invoices",
    table: "invoice",
    store_column: "store_no",
    exclusions: &[HELD_EXCLUSION, Exclusion::new("invc_type", &[7])],
};

pub const SLIP_OUT: CountClause = CountClause {
    label: "Slip out",
    table: "slip",
    store_column: "out_store_no",
    exclusions: &[HELD_EXCLUSION],
};

pub const SLIP_IN: CountClause = CountClause {
    label: "Slip in",
    table: "slip",
    store_column: "in_store_no",
    exclusions: &[HELD_EXCLUSION],
};

pub const VOUCHER: CountClause = CountClause {
    label: "Voucher",
    table: "voucher",
    store_column: "store_no",
    exclusions: &[HELD_EXCLUSION, Exclusion::new("vou_class", &[2])],
};

/// Union order of the generated statement
pub const COUNT_CLAUSES: [CountClause; 4] = [INVOICES, SLIP_OUT, SLIP_IN, VOUCHER];
