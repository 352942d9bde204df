//! HT1382 register map

use ht1382_hal::SlaveAddress;

/// Bus address of the HT1382 (fixed by the chip)
pub const HT1382_ADDRESS: SlaveAddress = match SlaveAddress::new(0x68) {
    Some(address) => address,
    None => panic!("HT1382 address must fit in 7 bits"),
};

/// Number of registers (0x00-0x14)
pub const REGISTER_COUNT: usize = 21;

/// Length of the seconds..year block
pub const DATETIME_LEN: usize = 7;

/// Register addresses
pub mod reg {
    /// Seconds (BCD) + clock halt
    pub const SECONDS: u8 = 0x00;
    /// Minutes (BCD)
    pub const MINUTES: u8 = 0x01;
    /// Hours (BCD, 24h)
    pub const HOURS: u8 = 0x02;
    /// Day of month (BCD)
    pub const DATE: u8 = 0x03;
    /// Month (BCD)
    pub const MONTH: u8 = 0x04;
    /// Day of week (1-7)
    pub const DAY: u8 = 0x05;
    /// Year within century (BCD)
    pub const YEAR: u8 = 0x06;
    /// Status 1 (write protect)
    pub const ST1: u8 = 0x07;
    /// Status 2 (alarm/battery flags)
    pub const ST2: u8 = 0x08;
    /// Interrupt and frequency output control
    pub const INT: u8 = 0x09;
    pub const SECONDS_ALARM: u8 = 0x0A;
    pub const MINUTES_ALARM: u8 = 0x0B;
    pub const HOURS_ALARM: u8 = 0x0C;
    pub const DATE_ALARM: u8 = 0x0D;
    pub const MONTH_ALARM: u8 = 0x0E;
    pub const DAY_ALARM: u8 = 0x0F;
    /// Digital trimming
    pub const DT: u8 = 0x10;
    pub const USR1: u8 = 0x11;
    pub const USR2: u8 = 0x12;
    pub const USR3: u8 = 0x13;
    pub const USR4: u8 = 0x14;
}

/// Bit positions within registers
pub mod bits {
    /// Seconds: clock halt
    pub const SECONDS_CH: u8 = 7;

    /// ST1: write protect
    pub const ST1_WP: u8 = 7;

    pub const ST2_BE: u8 = 1;
    pub const ST2_AI: u8 = 2;
    pub const ST2_EB: u8 = 3;
    pub const ST2_EWE: u8 = 4;
    pub const ST2_ARE: u8 = 7;

    /// INT: lowest bit of the 4-bit frequency output field FO[3:0]
    pub const INT_FO0: u8 = 0;
    pub const INT_FO1: u8 = 1;
    pub const INT_FO2: u8 = 2;
    pub const INT_FO3: u8 = 3;
    pub const INT_OEOBM: u8 = 4;
    pub const INT_LPM: u8 = 5;
    pub const INT_AE: u8 = 6;
    pub const INT_IME: u8 = 7;

    /// Enable bit shared by all alarm registers
    pub const ALARM_EN: u8 = 7;

    /// DT: trim value DT[6:0] and sign
    pub const DT_DT0: u8 = 0;
    pub const DT_DTS: u8 = 7;
}

/// Width mask of the INT frequency output field (before shifting)
pub const INT_FO_MASK: u8 = 0x0F;

/// Register names, indexed by address
pub const NAMES: [&str; REGISTER_COUNT] = [
    "SECONDS",
    "MINUTES",
    "HOURS",
    "DATE",
    "MONTH",
    "DAY",
    "YEAR",
    "ST1",
    "ST2",
    "INT",
    "SECONDS_ALARM",
    "MINUTES_ALARM",
    "HOURS_ALARM",
    "DATE_ALARM",
    "MONTH_ALARM",
    "DAY_ALARM",
    "DT",
    "USR1",
    "USR2",
    "USR3",
    "USR4",
];

/// Name of a register, `None` outside the map
pub fn name(address: u8) -> Option<&'static str> {
    NAMES.get(address as usize).copied()
}
