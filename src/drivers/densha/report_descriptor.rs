//! USB descriptors of the Taito Densha controllers as described at:
//! https://marcriera.github.io/ddgo-controller-docs/controllers/usb/

/// String descriptors: language placeholder, manufacturer, product, serial
pub type DescriptorStrings = [&'static str; 4];

pub const TYPE2_STRINGS: DescriptorStrings = ["", "TAITO", "TAITO_DENSYA_CON_T01", "TCPP20009"];
pub const SHINKANSEN_STRINGS: DescriptorStrings =
    ["", "TAITO", "TAITO_DENSYA_CON_T02", "TCPP20011"];
pub const RYOJOUHEN_STRINGS: DescriptorStrings =
    ["", "TAITO", "TAITO_DENSYA_CON_T03", "TCPP20014"];

pub const TYPE2_DEVICE_DESCRIPTOR: [u8; 18] = [
    0x12, // bLength
    0x01, // bDescriptorType (Device)
    0x10, 0x01, // bcdUSB 1.10
    0xFF, // bDeviceClass
    0x04, // bDeviceSubClass
    0x00, // bDeviceProtocol
    0x08, // bMaxPacketSize0 8
    0xE4, 0x0A, // idVendor 0x0AE4
    0x04, 0x00, // idProduct 0x0004
    0x02, 0x01, // bcdDevice 1.02
    0x01, // iManufacturer (String Index)
    0x02, // iProduct (String Index)
    0x03, // iSerialNumber (String Index)
    0x01, // bNumConfigurations 1
];

pub const SHINKANSEN_DEVICE_DESCRIPTOR: [u8; 18] = [
    0x12, // bLength
    0x01, // bDescriptorType (Device)
    0x10, 0x01, // bcdUSB 1.10
    0xFF, // bDeviceClass
    0x05, // bDeviceSubClass
    0x00, // bDeviceProtocol
    0x08, // bMaxPacketSize0 8
    0xE4, 0x0A, // idVendor 0x0AE4
    0x05, 0x00, // idProduct 0x0005
    0x02, 0x01, // bcdDevice 1.02
    0x01, // iManufacturer (String Index)
    0x02, // iProduct (String Index)
    0x03, // iSerialNumber (String Index)
    0x01, // bNumConfigurations 1
];

pub const RYOJOUHEN_DEVICE_DESCRIPTOR: [u8; 18] = [
    0x12, // bLength
    0x01, // bDescriptorType (Device)
    0x10, 0x01, // bcdUSB 1.10
    0xFF, // bDeviceClass
    0xFF, // bDeviceSubClass
    0x00, // bDeviceProtocol
    0x08, // bMaxPacketSize0 8
    0xE4, 0x0A, // idVendor 0x0AE4
    0x07, 0x00, // idProduct 0x0007
    0x02, 0x01, // bcdDevice 1.02
    0x01, // iManufacturer (String Index)
    0x02, // iProduct (String Index)
    0x03, // iSerialNumber (String Index)
    0x01, // bNumConfigurations 1
];

/// Configuration descriptor shared by every model
pub const CONFIG_DESCRIPTOR: [u8; 25] = [
    0x09, // bLength
    0x02, // bDescriptorType (Configuration)
    0x19, 0x00, // wTotalLength 25
    0x01, // bNumInterfaces 1
    0x01, // bConfigurationValue
    0x00, // iConfiguration (String Index)
    0xA0, // bmAttributes Remote Wakeup
    0xFA, // bMaxPower 500mA
    0x09, //  bLength
    0x04, //  bDescriptorType (Interface)
    0x00, //  bInterfaceNumber 0
    0x00, //  bAlternateSetting
    0x01, //  bNumEndpoints 1
    0x03, //  bInterfaceClass (HID)
    0x00, //  bInterfaceSubClass
    0x00, //  bInterfaceProtocol
    0x00, //  iInterface (String Index)
    0x07, //   bLength
    0x05, //   bDescriptorType (Endpoint)
    0x81, //   bEndpointAddress (IN/D2H) 1
    0x03, //   bmAttributes (Interrupt)
    0x08, 0x00, //   wMaxPacketSize 8
    0x14, //   bInterval 20
];

// Descriptor layout: preamble, axes (brake, power, horn/pedal), hat switch,
// buttons and padding. Only the placement of the pad bytes and the button
// count differ between models.

pub const TYPE2_REPORT_DESCRIPTOR: [u8; 82] = [
    0x05, 0x01, // Usage Page (Generic Desktop)        0
    0x09, 0x04, // Usage (Joystick)                    2
    0xA1, 0x01, // Collection (Application)            4
    0x75, 0x08, //  Report Size (8)                    6
    0x95, 0x01, //  Report Count (1)                   8
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               10
    0x09, 0x01, //  Usage (Pointer)                    12
    0xA1, 0x00, //  Collection (Physical)              14
    0x09, 0x30, //   Usage (X)                         16
    0x09, 0x31, //   Usage (Y)                         18
    0x09, 0x32, //   Usage (Z)                         20
    0x15, 0x00, //   Logical Minimum (0)               22
    0x26, 0xFF, 0x00, //   Logical Maximum (255)       24
    0x75, 0x08, //   Report Size (8)                   27
    0x95, 0x03, //   Report Count (3)                  29
    0x81, 0x02, //   Input (Data,Var,Abs)              31
    0xC0, //  End Collection                           33
    0x05, 0x01, //  Usage Page (Generic Desktop)       34
    0x25, 0x07, //  Logical Maximum (7)                36
    0x46, 0x3B, 0x01, //  Physical Maximum (315)       38
    0x75, 0x04, //  Report Size (4)                    41
    0x95, 0x01, //  Report Count (1)                   43
    0x65, 0x14, //  Unit (EnglishRotation: deg)        45
    0x09, 0x39, //  Usage (Hat switch)                 47
    0x81, 0x42, //  Input (Data,Var,Abs,Null)          49
    0x65, 0x00, //  Unit (None)                        51
    0x95, 0x01, //  Report Count (1)                   53
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               55
    0x05, 0x09, //  Usage Page (Button)                57
    0x19, 0x01, //  Usage Minimum (1)                  59
    0x29, 0x06, //  Usage Maximum (6)                  61
    0x15, 0x00, //  Logical Minimum (0)                63
    0x25, 0x01, //  Logical Maximum (1)                65
    0x35, 0x00, //  Physical Minimum (0)               67
    0x45, 0x01, //  Physical Maximum (1)               69
    0x75, 0x01, //  Report Size (1)                    71
    0x95, 0x06, //  Report Count (6)                   73
    0x81, 0x02, //  Input (Data,Var,Abs)               75
    0x95, 0x02, //  Report Count (2)                   77
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               79
    0xC0, // End Collection                            81
];

pub const SHINKANSEN_REPORT_DESCRIPTOR: [u8; 82] = [
    0x05, 0x01, // Usage Page (Generic Desktop)        0
    0x09, 0x04, // Usage (Joystick)                    2
    0xA1, 0x01, // Collection (Application)            4
    0x09, 0x01, //  Usage (Pointer)                    6
    0xA1, 0x00, //  Collection (Physical)              8
    0x09, 0x30, //   Usage (X)                         10
    0x09, 0x31, //   Usage (Y)                         12
    0x09, 0x32, //   Usage (Z)                         14
    0x15, 0x00, //   Logical Minimum (0)               16
    0x26, 0xFF, 0x00, //   Logical Maximum (255)       18
    0x75, 0x08, //   Report Size (8)                   21
    0x95, 0x03, //   Report Count (3)                  23
    0x81, 0x02, //   Input (Data,Var,Abs)              25
    0xC0, //  End Collection                           27
    0x05, 0x01, //  Usage Page (Generic Desktop)       28
    0x25, 0x07, //  Logical Maximum (7)                30
    0x46, 0x3B, 0x01, //  Physical Maximum (315)       32
    0x75, 0x04, //  Report Size (4)                    35
    0x95, 0x01, //  Report Count (1)                   37
    0x65, 0x14, //  Unit (EnglishRotation: deg)        39
    0x09, 0x39, //  Usage (Hat switch)                 41
    0x81, 0x42, //  Input (Data,Var,Abs,Null)          43
    0x65, 0x00, //  Unit (None)                        45
    0x95, 0x01, //  Report Count (1)                   47
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               49
    0x05, 0x09, //  Usage Page (Button)                51
    0x19, 0x01, //  Usage Minimum (1)                  53
    0x29, 0x06, //  Usage Maximum (6)                  55
    0x15, 0x00, //  Logical Minimum (0)                57
    0x25, 0x01, //  Logical Maximum (1)                59
    0x35, 0x00, //  Physical Minimum (0)               61
    0x45, 0x01, //  Physical Maximum (1)               63
    0x75, 0x01, //  Report Size (1)                    65
    0x95, 0x06, //  Report Count (6)                   67
    0x81, 0x02, //  Input (Data,Var,Abs)               69
    0x95, 0x02, //  Report Count (2)                   71
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               73
    0x75, 0x08, //  Report Size (8)                    75
    0x95, 0x01, //  Report Count (1)                   77
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               79
    0xC0, // End Collection                            81
];

pub const RYOJOUHEN_REPORT_DESCRIPTOR: [u8; 94] = [
    0x05, 0x01, // Usage Page (Generic Desktop)        0
    0x09, 0x04, // Usage (Joystick)                    2
    0xA1, 0x01, // Collection (Application)            4
    0x09, 0x01, //  Usage (Pointer)                    6
    0xA1, 0x00, //  Collection (Physical)              8
    0x09, 0x30, //   Usage (X)                         10
    0x09, 0x31, //   Usage (Y)                         12
    0x09, 0x32, //   Usage (Z)                         14
    0x15, 0x00, //   Logical Minimum (0)               16
    0x26, 0xFF, 0x00, //   Logical Maximum (255)       18
    0x75, 0x08, //   Report Size (8)                   21
    0x95, 0x03, //   Report Count (3)                  23
    0x81, 0x02, //   Input (Data,Var,Abs)              25
    0xC0, //  End Collection                           27
    0x05, 0x01, //  Usage Page (Generic Desktop)       28
    0x25, 0x07, //  Logical Maximum (7)                30
    0x46, 0x3B, 0x01, //  Physical Maximum (315)       32
    0x75, 0x04, //  Report Size (4)                    35
    0x95, 0x01, //  Report Count (1)                   37
    0x65, 0x14, //  Unit (EnglishRotation: deg)        39
    0x09, 0x39, //  Usage (Hat switch)                 41
    0x81, 0x42, //  Input (Data,Var,Abs,Null)          43
    0x65, 0x00, //  Unit (None)                        45
    0x95, 0x01, //  Report Count (1)                   47
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               49
    0x05, 0x09, //  Usage Page (Button)                51
    0x19, 0x01, //  Usage Minimum (1)                  53
    0x29, 0x07, //  Usage Maximum (7)                  55
    0x15, 0x00, //  Logical Minimum (0)                57
    0x25, 0x01, //  Logical Maximum (1)                59
    0x35, 0x00, //  Physical Minimum (0)               61
    0x45, 0x01, //  Physical Maximum (1)               63
    0x75, 0x01, //  Report Size (1)                    65
    0x95, 0x07, //  Report Count (7)                   67
    0x81, 0x02, //  Input (Data,Var,Abs)               69
    0x95, 0x01, //  Report Count (1)                   71
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               73
    0x75, 0x08, //  Report Size (8)                    75
    0x95, 0x01, //  Report Count (1)                   77
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               79
    0x75, 0x08, //  Report Size (8)                    81
    0x95, 0x01, //  Report Count (1)                   83
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               85
    0x75, 0x08, //  Report Size (8)                    87
    0x95, 0x01, //  Report Count (1)                   89
    0x81, 0x01, //  Input (Cnst,Arr,Abs)               91
    0xC0, // End Collection                            93
];
