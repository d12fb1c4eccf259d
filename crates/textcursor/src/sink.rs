//! Output cursors for [`TextWriter`](crate::TextWriter).

use crate::EncodeError;

/// Somewhere encoded code units go.
pub trait UnitSink<U: Copy> {
    fn push_unit(&mut self, unit: U) -> Result<(), EncodeError>;

    /// Append every unit or none of them.
    ///
    /// The default forwards to [`push_unit`](Self::push_unit) and is only
    /// all-or-nothing for sinks that never reject a unit.
    fn extend_units(&mut self, units: &[U]) -> Result<(), EncodeError> {
        units.iter().try_for_each(|&unit| self.push_unit(unit))
    }
}

impl<U: Copy, S: UnitSink<U> + ?Sized> UnitSink<U> for &mut S {
    fn push_unit(&mut self, unit: U) -> Result<(), EncodeError> {
        (**self).push_unit(unit)
    }

    fn extend_units(&mut self, units: &[U]) -> Result<(), EncodeError> {
        (**self).extend_units(units)
    }
}

#[cfg(feature = "alloc")]
impl<U: Copy> UnitSink<U> for alloc::vec::Vec<U> {
    fn push_unit(&mut self, unit: U) -> Result<(), EncodeError> {
        self.push(unit);
        Ok(())
    }

    fn extend_units(&mut self, units: &[U]) -> Result<(), EncodeError> {
        self.extend_from_slice(units);
        Ok(())
    }
}

/// Writes into a fixed buffer and refuses writes that do not fit.
#[derive(Debug)]
pub struct SliceSink<'a, U> {
    buf: &'a mut [U],
    len: usize,
}

impl<'a, U: Copy> SliceSink<'a, U> {
    pub fn new(buf: &'a mut [U]) -> Self {
        SliceSink { buf, len: 0 }
    }

    /// The units written so far.
    #[must_use]
    pub fn written(&self) -> &[U] {
        &self.buf[..self.len]
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    #[must_use]
    pub fn into_written(self) -> &'a [U] {
        &self.buf[..self.len]
    }
}

impl<U: Copy> UnitSink<U> for SliceSink<'_, U> {
    fn push_unit(&mut self, unit: U) -> Result<(), EncodeError> {
        self.extend_units(&[unit])
    }

    fn extend_units(&mut self, units: &[U]) -> Result<(), EncodeError> {
        if units.len() > self.remaining() {
            return Err(EncodeError::OutputFull {
                needed: units.len() - self.remaining(),
            });
        }
        self.buf[self.len..self.len + units.len()].copy_from_slice(units);
        self.len += units.len();
        Ok(())
    }
}
