use core::{fmt, marker::PhantomData};

use crate::{
    EncodeError,
    codec::{Encode, EncodeTransition},
    sink::UnitSink,
};

/// Encodes characters straight into an output sink.
///
/// Nothing is buffered: each [`write`](Self::write) is one encode call whose
/// units are in the sink when it returns, and dropping the writer does
/// nothing.
pub struct TextWriter<E: Encode, O> {
    state: E::State,
    out: O,
    codec: PhantomData<fn() -> E>,
}

impl<E, O> TextWriter<E, O>
where
    E: Encode,
    O: UnitSink<E::Unit>,
{
    pub fn new(out: O) -> Self
    where
        E::State: Default,
    {
        Self::with_state(E::State::default(), out)
    }

    pub fn with_state(state: E::State, out: O) -> Self {
        TextWriter {
            state,
            out,
            codec: PhantomData,
        }
    }

    /// Encode one character, returning the number of units written.
    ///
    /// # Errors
    ///
    /// Propagates the codec's [`EncodeError`].
    pub fn write(&mut self, character: E::Character) -> Result<usize, EncodeError> {
        E::encode(&mut self.state, &mut self.out, character).inspect_err(|_error| {
            debug_event!(error = %_error, "character rejected by encoder");
        })
    }

    /// Encode every character in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The first [`EncodeError`] hit; earlier characters stay written.
    pub fn write_all<I>(&mut self, characters: I) -> Result<usize, EncodeError>
    where
        I: IntoIterator<Item = E::Character>,
    {
        characters
            .into_iter()
            .try_fold(0, |total, character| Ok(total + self.write(character)?))
    }

    pub fn state(&self) -> &E::State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut E::State {
        &mut self.state
    }

    pub fn get_ref(&self) -> &O {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut O {
        &mut self.out
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<E, O> TextWriter<E, O>
where
    E: EncodeTransition,
    O: UnitSink<E::Unit>,
{
    /// Emit the units for a state change without a character.
    ///
    /// # Errors
    ///
    /// Propagates the codec's [`EncodeError`].
    pub fn write_transition(&mut self, transition: &E::Transition) -> Result<usize, EncodeError> {
        E::encode_transition(&mut self.state, &mut self.out, transition).inspect_err(|_error| {
            debug_event!(error = %_error, "state transition rejected by encoder");
        })
    }
}

impl<E, O> fmt::Write for TextWriter<E, O>
where
    E: Encode<Character = char>,
    O: UnitSink<E::Unit>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_all(s.chars()).map(drop).map_err(|_| fmt::Error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.write(c).map(drop).map_err(|_| fmt::Error)
    }
}

impl<E, O> Clone for TextWriter<E, O>
where
    E: Encode,
    O: Clone,
{
    fn clone(&self) -> Self {
        TextWriter {
            state: self.state.clone(),
            out: self.out.clone(),
            codec: PhantomData,
        }
    }
}

impl<E, O> fmt::Debug for TextWriter<E, O>
where
    E: Encode,
    E::State: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextWriter")
            .field("state", &self.state)
            .field("out", &self.out)
            .finish()
    }
}
