use enumset::EnumSet;

use crate::device::Device;

/// Devices offered to the user, in selection order.
///
/// Devices are only ever appended, so an index stays valid for the whole session.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry(Vec<Device>);

impl Default for Registry {
    /// All known devices in declaration order.
    fn default() -> Self {
        EnumSet::<Device>::all().iter().collect()
    }
}

impl FromIterator<Device> for Registry {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Registry {
    pub fn push(&mut self, device: Device) -> usize {
        self.0.push(device);
        self.0.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Device> {
        self.0.get(index).copied()
    }

    /// Find the device by its display name or any historical alias.
    ///
    /// A device pushed more than once resolves to its first index.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<Device> {
        self.position(name).map(|index| self.0[index])
    }

    /// Selection index of the device known by the name or alias.
    ///
    /// A device pushed more than once resolves to its first index.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        let device = Device::from_alias(name)?;
        self.0.iter().position(|candidate| *candidate == device)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Device> + '_ {
        self.0.iter().copied()
    }
}
