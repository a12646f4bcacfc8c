use std::collections::BTreeMap;

use jiff::civil::Date;

use wutong_core::error::CoreError;
use wutong_core::models::day::DayState;
use wutong_core::models::export_row::ExportRow;
use wutong_core::models::record::{self, HourlyRecord};
use wutong_core::models::resolution::Resolution;
use wutong_core::models::score::PainScore;
use wutong_core::slot::{self, HalfDay};
use wutong_dosing::{PolicyConfig, Resolver};

use crate::error::LedgerError;
use crate::view::{BaseSource, Bases, DayView};

/// Date-keyed store of [`DayState`]s for one caregiver session.
///
/// Days are created lazily on first reference and only removed by
/// [`Ledger::reset`]. Recommendations are never stored: every read walks
/// back through the contiguous run of earlier days and resolves forward,
/// so an edit to day N shows up in day N+1 the next time it is read.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    days: BTreeMap<Date, DayState>,
    resolver: Resolver,
}

impl Ledger {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            days: BTreeMap::new(),
            resolver: Resolver::new(policy),
        }
    }

    pub fn policy(&self) -> PolicyConfig {
        self.resolver.policy
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Dates present in the ledger, ascending.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.keys().copied()
    }

    pub fn get(&self, date: Date) -> Option<&DayState> {
        self.days.get(&date)
    }

    /// The day for `date`, created empty on first reference.
    pub fn day_mut(&mut self, date: Date) -> &mut DayState {
        self.days.entry(date).or_insert_with(|| {
            tracing::debug!(%date, "day created");
            DayState::new(date)
        })
    }

    /// Replace one hourly record. At slots 0 and 12 the record's
    /// maintenance dose is the manual base for that half.
    pub fn update_record(
        &mut self,
        date: Date,
        slot: usize,
        record: HourlyRecord,
    ) -> Result<(), LedgerError> {
        record.validate(slot)?;
        *self.slot_mut(date, slot)? = record;
        tracing::debug!(%date, slot, "record updated");
        Ok(())
    }

    pub fn set_score(
        &mut self,
        date: Date,
        slot: usize,
        score: PainScore,
    ) -> Result<(), LedgerError> {
        slot::check_slot(slot)?;
        let score = score.validated()?;
        self.slot_mut(date, slot)?.score = score;
        tracing::debug!(%date, slot, %score, "score set");
        Ok(())
    }

    /// Apply one score to several slots. Nothing is written unless every
    /// slot is valid.
    pub fn fill_scores(
        &mut self,
        date: Date,
        slots: &[usize],
        score: PainScore,
    ) -> Result<(), LedgerError> {
        let score = score.validated()?;
        for &slot in slots {
            slot::check_slot(slot)?;
        }

        for &slot in slots {
            self.slot_mut(date, slot)?.score = score;
        }
        tracing::debug!(%date, count = slots.len(), %score, "scores filled");
        Ok(())
    }

    /// Enter or clear (`None`) the manual maintenance base for one half.
    pub fn set_manual_base(
        &mut self,
        date: Date,
        half: HalfDay,
        dose: Option<f64>,
    ) -> Result<(), LedgerError> {
        if let Some(dose) = dose {
            record::check_dose(dose)?;
        }
        self.day_mut(date).set_manual_base(half, dose);
        tracing::debug!(%date, ?half, ?dose, "manual base set");
        Ok(())
    }

    /// Enter or clear both manual bases. Neither is written unless both
    /// are valid.
    pub fn set_manual_bases(
        &mut self,
        date: Date,
        am: Option<f64>,
        pm: Option<f64>,
    ) -> Result<(), LedgerError> {
        for dose in [am, pm].into_iter().flatten() {
            record::check_dose(dose)?;
        }

        let day = self.day_mut(date);
        day.set_manual_base(HalfDay::Day, am);
        day.set_manual_base(HalfDay::Night, pm);
        tracing::debug!(%date, ?am, ?pm, "manual bases set");
        Ok(())
    }

    /// Bases in force for `date`: manual entry first, then the previous
    /// day's non-zero recommendation, else unset.
    pub fn effective_bases(&self, date: Date) -> Result<Bases, LedgerError> {
        let mut chain = Vec::new();
        let mut cursor = date;
        while !self.fully_manual(cursor) {
            let previous = cursor.yesterday()?;
            if !self.days.contains_key(&previous) {
                break;
            }
            chain.push(previous);
            cursor = previous;
        }

        let mut inherited: Option<Resolution> = None;
        for &day in chain.iter().rev() {
            let bases = self.bases_from(day, inherited.as_ref());
            inherited = Some(self.resolve_with(day, &bases));
        }

        Ok(self.bases_from(date, inherited.as_ref()))
    }

    /// Resolve `date` with its effective bases. A date that was never
    /// referenced resolves to zeros.
    pub fn resolve(&self, date: Date) -> Result<Resolution, LedgerError> {
        let bases = self.effective_bases(date)?;
        Ok(self.resolve_with(date, &bases))
    }

    /// Navigate to `date`, creating it if needed, and return what the
    /// caregiver sees for it.
    pub fn view(&mut self, date: Date) -> Result<DayView, LedgerError> {
        let records = self.day_mut(date).records.clone();
        let bases = self.effective_bases(date)?;
        let resolution = self.resolve_with(date, &bases);
        Ok(DayView {
            date,
            records,
            bases,
            resolution,
        })
    }

    /// One row per date that carries any recorded score, ascending.
    pub fn export_rows(&self) -> Result<Vec<ExportRow>, LedgerError> {
        let mut rows = Vec::new();
        for (&date, day) in &self.days {
            if !day.has_recorded_score() {
                continue;
            }
            let bases = self.effective_bases(date)?;
            let resolution = self.resolve_with(date, &bases);
            rows.push(ExportRow::new(
                date,
                bases.am,
                bases.pm,
                resolution.rescue_total,
            ));
        }
        Ok(rows)
    }

    /// Drop every day.
    pub fn reset(&mut self) {
        let dropped = self.days.len();
        self.days.clear();
        tracing::info!(dropped, "ledger reset");
    }

    fn slot_mut(&mut self, date: Date, slot: usize) -> Result<&mut HourlyRecord, LedgerError> {
        self.day_mut(date)
            .records
            .get_mut(slot)
            .ok_or(LedgerError::InvalidRecord(CoreError::InvalidSlot(slot)))
    }

    fn fully_manual(&self, date: Date) -> bool {
        self.days
            .get(&date)
            .is_some_and(|d| HalfDay::ALL.iter().all(|&h| d.manual_base(h).is_some()))
    }

    fn bases_from(&self, date: Date, inherited: Option<&Resolution>) -> Bases {
        let state = self.days.get(&date);
        let mut bases = Bases::unset();
        for half in HalfDay::ALL {
            if let Some(dose) = state.and_then(|s| s.manual_base(half)) {
                bases.set(half, dose, BaseSource::Manual);
            } else if let Some(next) = inherited.map(|r| r.next_dose(half)).filter(|&d| d > 0) {
                bases.set(half, f64::from(next), BaseSource::Inherited);
            }
        }
        bases
    }

    fn resolve_with(&self, date: Date, bases: &Bases) -> Resolution {
        let records = self
            .days
            .get(&date)
            .map(|d| d.records.as_slice())
            .unwrap_or(&[]);
        self.resolver.resolve(records, bases.am, bases.pm)
    }
}
