// ==========================================
// Termék önköltség-számítás - interactive prompts
// ==========================================
// Collects the cost vectors, overhead pools and allocation bases from a
// terminal session, re-prompting on invalid input. Prompt text follows
// the active locale; basis selectors are entered in English (as the
// Hungarian prompts themselves explain).
// ==========================================

use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::domain::cost::CostInput;
use crate::domain::types::{CompanyBasis, OperatingBasis};
use crate::i18n::{self, t, t_with_args, Language};
use crate::importer::default_product_names;

/// Everything interactive collection produces: labels, engine input and
/// the two basis selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedInput {
    pub products: Vec<String>,
    pub input: CostInput,
    pub operating_basis: OperatingBasis,
    pub company_basis: CompanyBasis,
}

// ==========================================
// PromptSession
// ==========================================
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptSession { input, output }
    }

    /// One trimmed line; a closed stream is an error rather than an
    /// endless retry loop.
    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading interactive input")?;
        if read == 0 {
            bail!("input stream closed before all values were collected");
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Language selection; also switches the active locale so every
    /// later prompt is already translated.
    pub fn read_language(&mut self) -> anyhow::Result<Language> {
        loop {
            self.show(&t("prompt.language"))?;
            match self.read_line()?.parse::<Language>() {
                Ok(language) => {
                    i18n::set_language(language);
                    return Ok(language);
                }
                Err(_) => self.show(&t("common.invalid_number"))?,
            }
        }
    }

    /// Product count; values below 2 are raised to 2, as the accountants
    /// always compare at least two products.
    pub fn read_product_count(&mut self) -> anyhow::Result<usize> {
        loop {
            self.show(&t("prompt.num_products"))?;
            match self.read_line()?.parse::<usize>() {
                Ok(count) if count >= 2 => return Ok(count),
                Ok(_) => {
                    self.show(&t("common.min_products"))?;
                    return Ok(2);
                }
                Err(_) => self.show(&t("common.invalid_number"))?,
            }
        }
    }

    /// Comma-separated vector of exactly `expected` numbers.
    pub fn read_cost_vector(
        &mut self,
        prompt_key: &str,
        expected: usize,
    ) -> anyhow::Result<Vec<f64>> {
        loop {
            self.show(&t(prompt_key))?;
            let line = self.read_line()?;
            let parsed: Result<Vec<f64>, _> = line
                .split(',')
                .map(|value| value.trim().parse::<f64>())
                .collect();
            match parsed {
                Ok(values) if values.len() == expected => return Ok(values),
                Ok(values) => self.show(&t_with_args(
                    "prompt.count_mismatch",
                    &[
                        ("expected", &expected.to_string()),
                        ("actual", &values.len().to_string()),
                    ],
                ))?,
                Err(_) => self.show(&t("common.invalid_number"))?,
            }
        }
    }

    /// Single numeric value (an overhead pool).
    pub fn read_scalar(&mut self, prompt_key: &str) -> anyhow::Result<f64> {
        loop {
            self.show(&t(prompt_key))?;
            match self.read_line()?.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.show(&t("common.invalid_number"))?,
            }
        }
    }

    pub fn read_operating_basis(&mut self) -> anyhow::Result<OperatingBasis> {
        loop {
            self.show(&t("prompt.operating_basis"))?;
            match self.read_line()?.parse::<OperatingBasis>() {
                Ok(basis) => return Ok(basis),
                Err(err) => self.show(&err.to_string())?,
            }
        }
    }

    pub fn read_company_basis(&mut self) -> anyhow::Result<CompanyBasis> {
        loop {
            self.show(&t("prompt.company_basis"))?;
            match self.read_line()?.parse::<CompanyBasis>() {
                Ok(basis) => return Ok(basis),
                Err(err) => self.show(&err.to_string())?,
            }
        }
    }

    /// Full collection flow, mirroring the paper worksheet: vectors
    /// first, then the pools, then the bases. Bases already fixed by
    /// flags or config are not asked again.
    pub fn collect(
        &mut self,
        operating_basis: Option<OperatingBasis>,
        company_basis: Option<CompanyBasis>,
    ) -> anyhow::Result<CollectedInput> {
        let count = self.read_product_count()?;

        let material = self.read_cost_vector("prompt.material", count)?;
        let labor = self.read_cost_vector("prompt.labor", count)?;
        let other = self.read_cost_vector("prompt.other", count)?;
        let production_units = self.read_cost_vector("prompt.units", count)?;
        let operating_overhead = self.read_scalar("prompt.operating_overhead")?;
        let company_overhead = self.read_scalar("prompt.company_overhead")?;

        let operating_basis = match operating_basis {
            Some(basis) => basis,
            None => self.read_operating_basis()?,
        };
        let company_basis = match company_basis {
            Some(basis) => basis,
            None => self.read_company_basis()?,
        };

        Ok(CollectedInput {
            products: default_product_names(count),
            input: CostInput {
                material,
                labor,
                other,
                production_units,
                operating_overhead,
                company_overhead,
            },
            operating_basis,
            company_basis,
        })
    }
}
