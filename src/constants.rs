// SENSOR_ADDRESS is the I2C address with the ADDR pin tied low.
pub const SENSOR_ADDRESS: u8 = 0x44;

// SENSOR_ADDRESS_ALT is the I2C address with the ADDR pin tied high.
pub const SENSOR_ADDRESS_ALT: u8 = 0x45;

// Single shot measurement, no clock stretching.
pub const CMD_MEASURE_HIGH: u16 = 0x2400;
pub const CMD_MEASURE_MEDIUM: u16 = 0x240B;
pub const CMD_MEASURE_LOW: u16 = 0x2416;

pub const CMD_READ_SERIAL_NUMBER: u16 = 0x3780;
pub const CMD_READ_STATUS_REGISTER: u16 = 0xF32D;
pub const CMD_SOFT_RESET: u16 = 0x30A2;

// The opcodes below are part of the sensor's command set but are not driven by
// this crate.

// Single shot measurement with clock stretching.
pub const CMD_MEASURE_HIGH_CLOCK_STRETCH: u16 = 0x2C06;
pub const CMD_MEASURE_MEDIUM_CLOCK_STRETCH: u16 = 0x2C0D;
pub const CMD_MEASURE_LOW_CLOCK_STRETCH: u16 = 0x2C10;

// Periodic acquisition, 0.5 / 1 / 2 / 4 / 10 measurements per second.
pub const CMD_PERIODIC_HALF_HZ_HIGH: u16 = 0x2032;
pub const CMD_PERIODIC_HALF_HZ_MEDIUM: u16 = 0x2024;
pub const CMD_PERIODIC_HALF_HZ_LOW: u16 = 0x202F;
pub const CMD_PERIODIC_1_HZ_HIGH: u16 = 0x2130;
pub const CMD_PERIODIC_1_HZ_MEDIUM: u16 = 0x2126;
pub const CMD_PERIODIC_1_HZ_LOW: u16 = 0x212D;
pub const CMD_PERIODIC_2_HZ_HIGH: u16 = 0x2236;
pub const CMD_PERIODIC_2_HZ_MEDIUM: u16 = 0x2220;
pub const CMD_PERIODIC_2_HZ_LOW: u16 = 0x222B;
pub const CMD_PERIODIC_4_HZ_HIGH: u16 = 0x2334;
pub const CMD_PERIODIC_4_HZ_MEDIUM: u16 = 0x2322;
pub const CMD_PERIODIC_4_HZ_LOW: u16 = 0x2329;
pub const CMD_PERIODIC_10_HZ_HIGH: u16 = 0x2737;
pub const CMD_PERIODIC_10_HZ_MEDIUM: u16 = 0x2721;
pub const CMD_PERIODIC_10_HZ_LOW: u16 = 0x272A;
pub const CMD_FETCH_DATA: u16 = 0xE000;
pub const CMD_STOP_PERIODIC: u16 = 0x3093;

pub const CMD_HEATER_ENABLE: u16 = 0x306D;
pub const CMD_HEATER_DISABLE: u16 = 0x3066;
pub const CMD_CLEAR_STATUS_REGISTER: u16 = 0x3041;

pub const CMD_READ_HIGH_ALERT_LIMIT_SET: u16 = 0xE11F;
pub const CMD_READ_HIGH_ALERT_LIMIT_CLEAR: u16 = 0xE114;
pub const CMD_READ_LOW_ALERT_LIMIT_CLEAR: u16 = 0xE109;
pub const CMD_READ_LOW_ALERT_LIMIT_SET: u16 = 0xE102;
pub const CMD_WRITE_HIGH_ALERT_LIMIT_SET: u16 = 0x611D;
pub const CMD_WRITE_HIGH_ALERT_LIMIT_CLEAR: u16 = 0x6116;
pub const CMD_WRITE_LOW_ALERT_LIMIT_CLEAR: u16 = 0x610B;
pub const CMD_WRITE_LOW_ALERT_LIMIT_SET: u16 = 0x6100;

// MEASUREMENT_DELAY_MS covers the worst case single shot conversion time.
pub const MEASUREMENT_DELAY_MS: u32 = 15;

// COMMAND_DELAY_MS is the settle time for register, serial number and reset commands.
pub const COMMAND_DELAY_MS: u32 = 1;

// STATUS_READ_ATTEMPTS bounds the command/read cycles of a status register read.
pub const STATUS_READ_ATTEMPTS: u8 = 10;
