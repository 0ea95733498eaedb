//! ## Bias and threshold tables
//!
//! Empirical bias of the raw HyperLogLog estimate for precision in [4..18] range and the
//! raw-estimate threshold below which linear counting is preferred.
//!
//! Bias tables hold `(mean raw estimate, mean raw estimate - true cardinality)` pairs sampled
//! at 100 evenly spaced cardinalities in `[0..5 * 2^P]` (see `scripts/generate_bias_tables.py`).
//! Thresholds are taken from the HyperLogLog++ paper.
//!
//! No empirical data exists above precision 18: both curves are rescaled from precision 18,
//! since bias and threshold grow linearly with the number of registers.

/// Highest precision with empirical data
const MAX_TABLE_PRECISION: u8 = 18;
/// Lowest supported precision
const MIN_TABLE_PRECISION: u8 = 4;

/// Return estimated bias of raw estimate `raw` for precision `p`, interpolating linearly
/// between the two closest table points.
pub fn bias(raw: f64, p: u8) -> f64 {
    if p > MAX_TABLE_PRECISION {
        let scale = f64::from(1u32 << (p - MAX_TABLE_PRECISION));
        return scale * bias(raw / scale, MAX_TABLE_PRECISION);
    }

    let idx = usize::from(p - MIN_TABLE_PRECISION);
    let estimates = RAW_ESTIMATE_DATA[idx];
    let biases = BIAS_DATA[idx];

    if raw <= estimates[0] {
        return biases[0];
    }
    let last = estimates.len() - 1;
    if raw >= estimates[last] {
        return biases[last];
    }

    // first table point greater than `raw`, guaranteed to be in [1..last] range
    let pos = estimates.partition_point(|&e| e <= raw);
    let (e1, e2) = (estimates[pos - 1], estimates[pos]);
    let ratio = (raw - e1) / (e2 - e1);
    biases[pos - 1] + ratio * (biases[pos] - biases[pos - 1])
}

/// Return raw estimate threshold for using linear counting at precision `p`
pub fn threshold(p: u8) -> f64 {
    if p > MAX_TABLE_PRECISION {
        let scale = f64::from(1u32 << (p - MAX_TABLE_PRECISION));
        return scale * THRESHOLD[usize::from(MAX_TABLE_PRECISION - MIN_TABLE_PRECISION)];
    }
    THRESHOLD[usize::from(p - MIN_TABLE_PRECISION)]
}

/// Linear counting thresholds for precision in [4..18] range
const THRESHOLD: [f64; 15] = [
    10.0,     // p = 4
    20.0,     // p = 5
    40.0,     // p = 6
    80.0,     // p = 7
    220.0,    // p = 8
    400.0,    // p = 9
    900.0,    // p = 10
    1800.0,   // p = 11
    3100.0,   // p = 12
    6500.0,   // p = 13
    11500.0,  // p = 14
    20000.0,  // p = 15
    50000.0,  // p = 16
    120000.0, // p = 17
    350000.0, // p = 18
];

const RAW_ESTIMATE_DATA: [&[f64]; 15] = [
    &RAW_ESTIMATE_P4,
    &RAW_ESTIMATE_P5,
    &RAW_ESTIMATE_P6,
    &RAW_ESTIMATE_P7,
    &RAW_ESTIMATE_P8,
    &RAW_ESTIMATE_P9,
    &RAW_ESTIMATE_P10,
    &RAW_ESTIMATE_P11,
    &RAW_ESTIMATE_P12,
    &RAW_ESTIMATE_P13,
    &RAW_ESTIMATE_P14,
    &RAW_ESTIMATE_P15,
    &RAW_ESTIMATE_P16,
    &RAW_ESTIMATE_P17,
    &RAW_ESTIMATE_P18,
];

const BIAS_DATA: [&[f64]; 15] = [
    &BIAS_P4,
    &BIAS_P5,
    &BIAS_P6,
    &BIAS_P7,
    &BIAS_P8,
    &BIAS_P9,
    &BIAS_P10,
    &BIAS_P11,
    &BIAS_P12,
    &BIAS_P13,
    &BIAS_P14,
    &BIAS_P15,
    &BIAS_P16,
    &BIAS_P17,
    &BIAS_P18,
];

// p = 4, 5000 trials
const RAW_ESTIMATE_P4: [f64; 81] = [
    10.7680, 11.2383, 11.7225, 12.2205, 12.7374, 13.2674, 13.8067, 14.3752,
    14.9537, 15.5458, 16.1469, 16.7804, 17.4410, 18.1013, 18.7720, 19.4456,
    20.1407, 20.8459, 21.5729, 22.3442, 23.1004, 23.8918, 24.7123, 25.5185,
    26.3162, 27.1375, 27.9746, 28.7855, 29.6659, 30.5318, 31.3917, 32.2538,
    33.1712, 34.0786, 34.9786, 35.8647, 36.7822, 37.7089, 38.6662, 39.5531,
    40.4712, 41.3832, 42.3538, 43.2809, 44.2714, 45.2594, 46.2166, 47.1770,
    48.1687, 49.0720, 49.9906, 50.9369, 51.9636, 52.9965, 53.9871, 54.9439,
    55.9051, 56.9174, 57.8939, 58.9000, 59.8844, 60.8611, 61.8836, 62.8938,
    63.9015, 64.9353, 65.8409, 66.8049, 67.7350, 68.7925, 69.7508, 70.7220,
    71.7237, 72.7489, 73.7926, 74.7696, 75.8025, 76.8451, 77.8896, 78.8442,
    79.7955,
];

const BIAS_P4: [f64; 81] = [
    10.7680, 10.2383, 9.7225, 9.2205, 8.7374, 8.2674, 7.8067, 7.3752,
    6.9537, 6.5458, 6.1469, 5.7804, 5.4410, 5.1013, 4.7720, 4.4456,
    4.1407, 3.8459, 3.5729, 3.3442, 3.1004, 2.8918, 2.7123, 2.5185,
    2.3162, 2.1375, 1.9746, 1.7855, 1.6659, 1.5318, 1.3917, 1.2538,
    1.1712, 1.0786, 0.9786, 0.8647, 0.7822, 0.7089, 0.6662, 0.5531,
    0.4712, 0.3832, 0.3538, 0.2809, 0.2714, 0.2594, 0.2166, 0.1770,
    0.1687, 0.0720, -0.0094, -0.0631, -0.0364, -0.0035, -0.0129, -0.0561,
    -0.0949, -0.0826, -0.1061, -0.1000, -0.1156, -0.1389, -0.1164, -0.1062,
    -0.0985, -0.0647, -0.1591, -0.1951, -0.2650, -0.2075, -0.2492, -0.2780,
    -0.2763, -0.2511, -0.2074, -0.2304, -0.1975, -0.1549, -0.1104, -0.1558,
    -0.2045,
];

// p = 5, 5000 trials
const RAW_ESTIMATE_P5: [f64; 101] = [
    22.3040, 23.2585, 23.7478, 24.7550, 25.2690, 26.3189, 27.4057, 27.9615,
    29.0778, 29.6504, 30.8049, 31.9875, 32.5989, 33.8396, 34.4703, 35.7682,
    37.0904, 37.7620, 39.1275, 39.8059, 41.1917, 42.6260, 43.3393, 44.7726,
    45.5463, 47.0721, 48.5891, 49.3545, 50.9458, 51.7246, 53.2947, 54.9725,
    55.7770, 57.4240, 58.2654, 59.9553, 61.6797, 62.5294, 64.2522, 65.1459,
    66.8929, 68.6803, 69.6100, 71.4145, 72.3078, 74.1281, 75.9750, 76.9072,
    78.7158, 79.6334, 81.4574, 83.3139, 84.2039, 86.0543, 86.9616, 88.8579,
    90.7143, 91.6887, 93.6489, 94.6630, 96.7036, 98.6821, 99.6436, 101.5624,
    102.5268, 104.3702, 106.3440, 107.3300, 109.2643, 110.1742, 112.1211, 114.1912,
    115.2576, 117.2261, 118.1978, 120.1445, 122.1253, 123.0720, 125.1031, 126.0319,
    128.0515, 130.0687, 131.0944, 133.0159, 134.0138, 135.9234, 137.9396, 138.9278,
    140.9724, 142.0172, 144.0483, 146.1458, 147.0493, 149.0166, 150.0025, 152.0009,
    153.9682, 154.9303, 156.9164, 157.9025, 159.8688,
];

const BIAS_P5: [f64; 101] = [
    22.3040, 21.2585, 20.7478, 19.7550, 19.2690, 18.3189, 17.4057, 16.9615,
    16.0778, 15.6504, 14.8049, 13.9875, 13.5989, 12.8396, 12.4703, 11.7682,
    11.0904, 10.7620, 10.1275, 9.8059, 9.1917, 8.6260, 8.3393, 7.7726,
    7.5463, 7.0721, 6.5891, 6.3545, 5.9458, 5.7246, 5.2947, 4.9725,
    4.7770, 4.4240, 4.2654, 3.9553, 3.6797, 3.5294, 3.2522, 3.1459,
    2.8929, 2.6803, 2.6100, 2.4145, 2.3078, 2.1281, 1.9750, 1.9072,
    1.7158, 1.6334, 1.4574, 1.3139, 1.2039, 1.0543, 0.9616, 0.8579,
    0.7143, 0.6887, 0.6489, 0.6630, 0.7036, 0.6821, 0.6436, 0.5624,
    0.5268, 0.3702, 0.3440, 0.3300, 0.2643, 0.1742, 0.1211, 0.1912,
    0.2576, 0.2261, 0.1978, 0.1445, 0.1253, 0.0720, 0.1031, 0.0319,
    0.0515, 0.0687, 0.0944, 0.0159, 0.0138, -0.0766, -0.0604, -0.0722,
    -0.0276, 0.0172, 0.0483, 0.1458, 0.0493, 0.0166, 0.0025, 0.0009,
    -0.0318, -0.0697, -0.0836, -0.0975, -0.1312,
];

// p = 6, 5000 trials
const RAW_ESTIMATE_P6: [f64; 101] = [
    45.3760, 46.8236, 48.2969, 50.3155, 51.8583, 53.4550, 55.0713, 56.7223,
    58.9881, 60.7274, 62.5040, 64.2835, 66.1109, 68.6120, 70.5223, 72.4736,
    74.4600, 76.4500, 79.1743, 81.2335, 83.3534, 85.4473, 87.6112, 90.5835,
    92.7959, 95.0286, 97.2798, 99.5935, 102.7457, 105.1238, 107.4965, 109.8822,
    112.2544, 115.4818, 117.9708, 120.5281, 123.0053, 125.5640, 128.9858, 131.6101,
    134.2604, 136.8815, 139.5462, 143.1189, 145.9026, 148.6169, 151.3505, 154.0291,
    157.7158, 160.4529, 163.1585, 165.9894, 168.7590, 172.4806, 175.4240, 178.2859,
    181.1518, 184.0116, 187.8190, 190.6567, 193.5182, 196.4680, 199.4106, 203.2384,
    206.2368, 209.0611, 211.9511, 214.9181, 218.8169, 221.7840, 224.7148, 227.6396,
    230.5579, 234.4788, 237.3404, 240.3590, 243.3456, 246.2259, 250.2710, 253.2386,
    256.2718, 259.2716, 262.2271, 266.0749, 269.0823, 272.0231, 275.0157, 278.1368,
    282.1005, 284.9736, 287.9174, 290.8186, 293.6153, 297.5937, 300.5042, 303.2322,
    306.1368, 309.1342, 313.0604, 316.0457, 319.0139,
];

const BIAS_P6: [f64; 101] = [
    45.3760, 43.8236, 42.2969, 40.3155, 38.8583, 37.4550, 36.0713, 34.7223,
    32.9881, 31.7274, 30.5040, 29.2835, 28.1109, 26.6120, 25.5223, 24.4736,
    23.4600, 22.4500, 21.1743, 20.2335, 19.3534, 18.4473, 17.6112, 16.5835,
    15.7959, 15.0286, 14.2798, 13.5935, 12.7457, 12.1238, 11.4965, 10.8822,
    10.2544, 9.4818, 8.9708, 8.5281, 8.0053, 7.5640, 6.9858, 6.6101,
    6.2604, 5.8815, 5.5462, 5.1189, 4.9026, 4.6169, 4.3505, 4.0291,
    3.7158, 3.4529, 3.1585, 2.9894, 2.7590, 2.4806, 2.4240, 2.2859,
    2.1518, 2.0116, 1.8190, 1.6567, 1.5182, 1.4680, 1.4106, 1.2384,
    1.2368, 1.0611, 0.9511, 0.9181, 0.8169, 0.7840, 0.7148, 0.6396,
    0.5579, 0.4788, 0.3404, 0.3590, 0.3456, 0.2259, 0.2710, 0.2386,
    0.2718, 0.2716, 0.2271, 0.0749, 0.0823, 0.0231, 0.0157, 0.1368,
    0.1005, -0.0264, -0.0826, -0.1814, -0.3847, -0.4063, -0.4958, -0.7678,
    -0.8632, -0.8658, -0.9396, -0.9543, -0.9861,
];

// p = 7, 5000 trials
const RAW_ESTIMATE_P7: [f64; 101] = [
    91.5546, 94.4589, 97.9249, 100.9747, 104.6182, 107.8069, 111.0660, 114.9583,
    118.3513, 122.3786, 125.9283, 129.5415, 133.7896, 137.5327, 141.9816, 145.8362,
    149.7805, 154.4694, 158.5458, 163.3708, 167.5954, 171.8316, 176.9074, 181.2848,
    186.5244, 191.0338, 195.5824, 200.9471, 205.6329, 211.0904, 215.7798, 220.6305,
    226.3837, 231.2564, 237.0848, 242.1807, 247.2528, 253.1290, 258.3136, 264.3228,
    269.5649, 274.9648, 281.1259, 286.4433, 292.7089, 298.1375, 303.6313, 310.0108,
    315.5608, 321.9839, 327.4510, 332.8423, 339.3716, 344.8822, 351.5556, 357.1514,
    362.8608, 369.3769, 375.1018, 381.8336, 387.6989, 393.4660, 400.1694, 405.8857,
    412.7363, 418.6116, 424.4129, 431.2025, 437.0270, 443.8336, 449.7714, 455.4304,
    462.2159, 468.1577, 475.1580, 481.1350, 486.9635, 493.7674, 499.6220, 506.6621,
    512.5616, 518.4816, 525.3561, 531.3230, 538.1789, 544.1190, 550.0122, 556.9894,
    562.9704, 569.7449, 575.7132, 581.7150, 588.5940, 594.5218, 601.4083, 607.4032,
    613.4887, 620.2871, 626.1887, 633.1655, 639.0795,
];

const BIAS_P7: [f64; 101] = [
    91.5546, 88.4589, 84.9249, 81.9747, 78.6182, 75.8069, 73.0660, 69.9583,
    67.3513, 64.3786, 61.9283, 59.5415, 56.7896, 54.5327, 51.9816, 49.8362,
    47.7805, 45.4694, 43.5458, 41.3708, 39.5954, 37.8316, 35.9074, 34.2848,
    32.5244, 31.0338, 29.5824, 27.9471, 26.6329, 25.0904, 23.7798, 22.6305,
    21.3837, 20.2564, 19.0848, 18.1807, 17.2528, 16.1290, 15.3136, 14.3228,
    13.5649, 12.9648, 12.1259, 11.4433, 10.7089, 10.1375, 9.6313, 9.0108,
    8.5608, 7.9839, 7.4510, 6.8423, 6.3716, 5.8822, 5.5556, 5.1514,
    4.8608, 4.3769, 4.1018, 3.8336, 3.6989, 3.4660, 3.1694, 2.8857,
    2.7363, 2.6116, 2.4129, 2.2025, 2.0270, 1.8336, 1.7714, 1.4304,
    1.2159, 1.1577, 1.1580, 1.1350, 0.9635, 0.7674, 0.6220, 0.6621,
    0.5616, 0.4816, 0.3561, 0.3230, 0.1789, 0.1190, 0.0122, -0.0106,
    -0.0296, -0.2551, -0.2868, -0.2850, -0.4060, -0.4782, -0.5917, -0.5968,
    -0.5113, -0.7129, -0.8113, -0.8345, -0.9205,
];

// p = 8, 5000 trials
const RAW_ESTIMATE_P8: [f64; 101] = [
    183.8778, 190.1806, 196.6501, 202.7440, 209.4988, 216.4443, 223.4959, 230.7005,
    237.5063, 245.0093, 252.7003, 260.4961, 268.4744, 275.9621, 284.2536, 292.6384,
    301.2209, 309.9254, 317.9809, 326.9369, 336.0380, 345.2751, 354.6166, 363.3714,
    372.9825, 382.7413, 392.5916, 402.6345, 411.9510, 422.1101, 432.4811, 442.9054,
    453.4858, 463.3456, 474.1642, 485.0340, 495.9561, 506.9854, 517.2273, 528.2985,
    539.5889, 550.9647, 562.5497, 573.2501, 584.9375, 596.7421, 608.4747, 620.4796,
    631.5249, 643.4164, 655.5016, 667.6484, 679.8199, 691.0303, 703.3024, 715.7614,
    728.1717, 740.5308, 751.8916, 764.3745, 776.6040, 789.0700, 801.7633, 813.2386,
    825.9374, 838.7756, 851.5232, 864.2899, 875.8587, 888.7507, 901.4353, 914.2557,
    926.8817, 938.6861, 951.4583, 964.1926, 977.0788, 990.0752, 1001.7869, 1014.6582,
    1027.5195, 1040.6862, 1053.2046, 1065.0206, 1077.8926, 1090.8947, 1104.0182, 1117.0126,
    1128.9229, 1141.9322, 1154.5861, 1167.3865, 1180.2914, 1192.2060, 1205.2693, 1218.3136,
    1231.3641, 1244.4082, 1256.2687, 1269.4360, 1282.5247,
];

const BIAS_P8: [f64; 101] = [
    183.8778, 177.1806, 170.6501, 164.7440, 158.4988, 152.4443, 146.4959, 140.7005,
    135.5063, 130.0093, 124.7003, 119.4961, 114.4744, 109.9621, 105.2536, 100.6384,
    96.2209, 91.9254, 87.9809, 83.9369, 80.0380, 76.2751, 72.6166, 69.3714,
    65.9825, 62.7413, 59.5916, 56.6345, 53.9510, 51.1101, 48.4811, 45.9054,
    43.4858, 41.3456, 39.1642, 37.0340, 34.9561, 32.9854, 31.2273, 29.2985,
    27.5889, 25.9647, 24.5497, 23.2501, 21.9375, 20.7421, 19.4747, 18.4796,
    17.5249, 16.4164, 15.5016, 14.6484, 13.8199, 13.0303, 12.3024, 11.7614,
    11.1717, 10.5308, 9.8916, 9.3745, 8.6040, 8.0700, 7.7633, 7.2386,
    6.9374, 6.7756, 6.5232, 6.2899, 5.8587, 5.7507, 5.4353, 5.2557,
    4.8817, 4.6861, 4.4583, 4.1926, 4.0788, 4.0752, 3.7869, 3.6582,
    3.5195, 3.6862, 3.2046, 3.0206, 2.8926, 2.8947, 3.0182, 3.0126,
    2.9229, 2.9322, 2.5861, 2.3865, 2.2914, 2.2060, 2.2693, 2.3136,
    2.3641, 2.4082, 2.2687, 2.4360, 2.5247,
];

// p = 9, 3906 trials
const RAW_ESTIMATE_P9: [f64; 101] = [
    368.5290, 381.1605, 393.5728, 406.8130, 419.8196, 433.6471, 447.7650, 461.6735,
    476.4024, 490.8368, 506.1928, 521.8115, 537.1267, 553.4472, 569.3450, 586.1038,
    603.2111, 619.8748, 637.4404, 654.6871, 672.9193, 691.4519, 709.4553, 728.4005,
    746.8629, 766.2088, 786.0568, 805.2151, 825.4456, 845.0038, 865.7363, 886.6348,
    906.9159, 928.1527, 948.9215, 970.5590, 992.4876, 1013.6616, 1036.0182, 1057.5909,
    1080.1397, 1102.6620, 1124.6109, 1147.5457, 1170.0980, 1193.4739, 1216.8919, 1239.3203,
    1263.1630, 1285.9123, 1309.7330, 1333.4885, 1356.7245, 1381.0538, 1404.4913, 1428.7784,
    1452.9645, 1476.7138, 1501.4769, 1525.3382, 1550.0493, 1575.1151, 1599.1395, 1623.8425,
    1648.1708, 1673.5485, 1698.5410, 1722.7999, 1748.1333, 1772.5698, 1798.3704, 1824.1046,
    1848.3917, 1874.3327, 1899.1087, 1925.0686, 1950.8446, 1975.4073, 2001.2789, 2025.8247,
    2051.6457, 2077.3068, 2102.2808, 2127.6237, 2152.4418, 2178.5771, 2204.3515, 2229.2527,
    2255.4017, 2280.2040, 2305.8076, 2331.4477, 2356.1874, 2381.9388, 2406.9868, 2432.7809,
    2458.8821, 2483.9122, 2509.7522, 2534.7716, 2560.1403,
];

const BIAS_P9: [f64; 101] = [
    368.5290, 355.1605, 342.5728, 329.8130, 317.8196, 305.6471, 293.7650, 282.6735,
    271.4024, 260.8368, 250.1928, 239.8115, 230.1267, 220.4472, 211.3450, 202.1038,
    193.2111, 184.8748, 176.4404, 168.6871, 160.9193, 153.4519, 146.4553, 139.4005,
    132.8629, 126.2088, 120.0568, 114.2151, 108.4456, 103.0038, 97.7363, 92.6348,
    87.9159, 83.1527, 78.9215, 74.5590, 70.4876, 66.6616, 63.0182, 59.5909,
    56.1397, 52.6620, 49.6109, 46.5457, 44.0980, 41.4739, 38.8919, 36.3203,
    34.1630, 31.9123, 29.7330, 27.4885, 25.7245, 24.0538, 22.4913, 20.7784,
    18.9645, 17.7138, 16.4769, 15.3382, 14.0493, 13.1151, 12.1395, 10.8425,
    10.1708, 9.5485, 8.5410, 7.7999, 7.1333, 6.5698, 6.3704, 6.1046,
    5.3917, 5.3327, 5.1087, 5.0686, 4.8446, 4.4073, 4.2789, 3.8247,
    3.6457, 3.3068, 3.2808, 2.6237, 2.4418, 2.5771, 2.3515, 2.2527,
    2.4017, 2.2040, 1.8076, 1.4477, 1.1874, 0.9388, 0.9868, 0.7809,
    0.8821, 0.9122, 0.7522, 0.7716, 0.1403,
];

// p = 10, 1953 trials
const RAW_ESTIMATE_P10: [f64; 101] = [
    737.8337, 762.6032, 787.9879, 814.4828, 841.1130, 868.2217, 895.9386, 924.2552,
    953.8022, 983.3601, 1013.5276, 1044.1153, 1075.2952, 1107.8272, 1140.1414, 1172.9686,
    1206.5838, 1240.7352, 1276.0781, 1311.3246, 1347.2044, 1383.2243, 1419.9872, 1457.8603,
    1495.5263, 1533.9495, 1572.5500, 1612.0970, 1652.6159, 1692.9126, 1733.4703, 1774.5057,
    1815.9766, 1858.8151, 1900.9836, 1943.5795, 1986.4463, 2029.6818, 2073.8840, 2117.5438,
    2162.0133, 2206.9845, 2251.8721, 2297.8082, 2343.4012, 2389.2671, 2435.8251, 2482.1776,
    2529.3438, 2576.4600, 2623.4529, 2670.9074, 2718.2376, 2767.1018, 2814.5439, 2862.4813,
    2910.6423, 2958.5701, 3008.5004, 3057.7788, 3106.3726, 3155.8301, 3204.3006, 3254.5309,
    3303.6835, 3353.4594, 3402.5766, 3452.3839, 3502.8103, 3552.6179, 3602.0898, 3651.6797,
    3701.7842, 3753.3521, 3803.1769, 3853.2718, 3903.4463, 3953.7698, 4004.8239, 4055.1452,
    4105.4551, 4156.3906, 4206.6849, 4259.2368, 4310.0312, 4360.4993, 4410.7824, 4462.0695,
    4514.1862, 4564.4188, 4614.4222, 4664.7525, 4716.4607, 4767.9977, 4819.1993, 4871.0020,
    4922.0007, 4973.7204, 5025.8646, 5076.7132, 5127.4124,
];

const BIAS_P10: [f64; 101] = [
    737.8337, 711.6032, 685.9879, 660.4828, 636.1130, 612.2217, 588.9386, 566.2552,
    543.8022, 522.3601, 501.5276, 481.1153, 461.2952, 441.8272, 423.1414, 404.9686,
    387.5838, 370.7352, 354.0781, 338.3246, 323.2044, 308.2243, 293.9872, 279.8603,
    266.5263, 253.9495, 241.5500, 230.0970, 218.6159, 207.9126, 197.4703, 187.5057,
    177.9766, 168.8151, 159.9836, 151.5795, 143.4463, 135.6818, 127.8840, 120.5438,
    114.0133, 107.9845, 101.8721, 95.8082, 90.4012, 85.2671, 80.8251, 76.1776,
    71.3438, 67.4600, 63.4529, 59.9074, 56.2376, 53.1018, 49.5439, 46.4813,
    43.6423, 40.5701, 38.5004, 36.7788, 34.3726, 32.8301, 30.3006, 28.5309,
    26.6835, 25.4594, 23.5766, 22.3839, 20.8103, 19.6179, 18.0898, 16.6797,
    15.7842, 15.3521, 14.1769, 13.2718, 12.4463, 11.7698, 10.8239, 10.1452,
    9.4551, 9.3906, 8.6849, 9.2368, 9.0312, 8.4993, 7.7824, 8.0695,
    8.1862, 7.4188, 6.4222, 5.7525, 6.4607, 5.9977, 6.1993, 7.0020,
    7.0007, 7.7204, 7.8646, 7.7132, 7.4124,
];

// p = 11, 976 trials
const RAW_ESTIMATE_P11: [f64; 101] = [
    1476.4445, 1526.0513, 1577.3859, 1629.3855, 1683.0128, 1737.3878, 1792.9689, 1850.0697,
    1907.8226, 1967.6220, 2028.0331, 2089.3295, 2152.4922, 2216.4233, 2281.5152, 2347.4985,
    2414.5203, 2483.2999, 2552.6220, 2623.9618, 2695.3494, 2767.6571, 2842.3121, 2916.4957,
    2992.9714, 3069.6902, 3147.4587, 3227.1742, 3306.7885, 3387.4226, 3467.9063, 3549.4565,
    3633.1388, 3716.7160, 3801.7973, 3886.3460, 3972.5101, 4058.9359, 4147.1631, 4236.7803,
    4324.8939, 4413.7557, 4505.3389, 4596.5347, 4689.2482, 4779.8471, 4871.7929, 4965.7543,
    5057.9116, 5152.7442, 5247.5309, 5342.5307, 5437.9678, 5534.1452, 5631.5607, 5727.8006,
    5824.5960, 5921.7282, 6018.1016, 6117.1478, 6215.0545, 6313.5553, 6412.0790, 6511.5552,
    6611.7437, 6710.9677, 6810.0140, 6909.1832, 7008.9120, 7109.1694, 7209.3993, 7309.8800,
    7411.6290, 7510.9822, 7611.6316, 7710.8618, 7810.7183, 7911.5455, 8013.3740, 8114.4678,
    8214.9791, 8314.8829, 8417.3628, 8518.9552, 8624.1873, 8725.1255, 8826.8264, 8928.9924,
    9031.0612, 9134.3846, 9234.7488, 9336.3643, 9439.2141, 9539.7974, 9641.6667, 9741.5517,
    9843.1783, 9946.8441, 10048.9122, 10151.6885, 10253.7843,
];

const BIAS_P11: [f64; 101] = [
    1476.4445, 1424.0513, 1372.3859, 1322.3855, 1273.0128, 1225.3878, 1178.9689, 1133.0697,
    1088.8226, 1045.6220, 1004.0331, 963.3295, 923.4922, 885.4233, 847.5152, 811.4985,
    776.5203, 742.2999, 709.6220, 677.9618, 647.3494, 617.6571, 589.3121, 561.4957,
    534.9714, 509.6902, 485.4587, 462.1742, 439.7885, 417.4226, 395.9063, 375.4565,
    356.1388, 337.7160, 319.7973, 302.3460, 286.5101, 269.9359, 256.1631, 242.7803,
    228.8939, 215.7557, 204.3389, 193.5347, 183.2482, 171.8471, 161.7929, 152.7543,
    142.9116, 134.7442, 127.5309, 120.5307, 112.9678, 107.1452, 101.5607, 95.8006,
    90.5960, 84.7282, 79.1016, 75.1478, 71.0545, 67.5553, 63.0790, 60.5552,
    57.7437, 54.9677, 52.0140, 48.1832, 45.9120, 43.1694, 41.3993, 39.8800,
    38.6290, 35.9822, 33.6316, 30.8618, 28.7183, 26.5455, 26.3740, 24.4678,
    22.9791, 20.8829, 20.3628, 19.9552, 22.1873, 21.1255, 20.8264, 19.9924,
    20.0612, 20.3846, 18.7488, 18.3643, 18.2141, 16.7974, 15.6667, 13.5517,
    13.1783, 13.8441, 13.9122, 13.6885, 13.7843,
];

// p = 12, 488 trials
const RAW_ESTIMATE_P12: [f64; 101] = [
    2953.6667, 3053.2425, 3155.3478, 3259.3102, 3366.1889, 3475.5320, 3587.0101, 3700.7167,
    3816.2856, 3934.9156, 4055.9321, 4179.3758, 4305.0141, 4432.6874, 4563.2805, 4695.0601,
    4829.1962, 4965.8091, 5104.0862, 5244.9061, 5389.0060, 5533.5427, 5680.6994, 5830.4277,
    5981.2911, 6135.1725, 6291.0275, 6448.2932, 6606.5476, 6767.6304, 6930.4369, 7093.3938,
    7258.6655, 7425.6502, 7594.3244, 7764.6294, 7936.8791, 8109.9435, 8285.0848, 8461.0619,
    8638.1196, 8815.5449, 8995.8545, 9177.7328, 9361.7914, 9545.4806, 9729.7424, 9915.7591,
    10101.4633, 10289.4403, 10477.8758, 10667.9586, 10860.6875, 11052.4019, 11246.2070, 11438.6741,
    11633.5803, 11827.2728, 12022.7188, 12217.0399, 12411.6710, 12605.9612, 12800.5548, 12997.2590,
    13194.3711, 13393.4810, 13591.4862, 13789.8339, 13987.2142, 14186.0495, 14386.9392, 14585.1321,
    14787.2955, 14988.5343, 15191.2352, 15394.3239, 15596.7528, 15797.6675, 15996.7744, 16197.2106,
    16396.9900, 16599.1124, 16804.6362, 17009.4843, 17209.8006, 17413.9370, 17617.2788, 17820.4784,
    18023.3962, 18229.9160, 18435.1827, 18637.1124, 18841.9560, 19045.2332, 19248.5399, 19449.4542,
    19653.1902, 19857.8571, 20060.0090, 20264.3259, 20465.7172,
];

const BIAS_P12: [f64; 101] = [
    2953.6667, 2848.2425, 2745.3478, 2645.3102, 2547.1889, 2451.5320, 2358.0101, 2266.7167,
    2178.2856, 2091.9156, 2007.9321, 1926.3758, 1847.0141, 1770.6874, 1696.2805, 1623.0601,
    1552.1962, 1483.8091, 1418.0862, 1353.9061, 1293.0060, 1232.5427, 1174.6994, 1120.4277,
    1066.2911, 1015.1725, 966.0275, 918.2932, 872.5476, 828.6304, 786.4369, 744.3938,
    704.6655, 667.6502, 631.3244, 596.6294, 563.8791, 531.9435, 503.0848, 474.0619,
    446.1196, 418.5449, 393.8545, 371.7328, 350.7914, 329.4806, 308.7424, 289.7591,
    271.4633, 254.4403, 237.8758, 222.9586, 210.6875, 198.4019, 187.2070, 174.6741,
    164.5803, 153.2728, 144.7188, 134.0399, 123.6710, 112.9612, 102.5548, 95.2590,
    87.3711, 81.4810, 74.4862, 67.8339, 61.2142, 55.0495, 50.9392, 44.1321,
    41.2955, 38.5343, 36.2352, 34.3239, 31.7528, 27.6675, 22.7744, 18.2106,
    12.9900, 10.1124, 10.6362, 11.4843, 6.8006, 5.9370, 4.2788, 2.4784,
    1.3962, 2.9160, 3.1827, 0.1124, -0.0440, -0.7668, -2.4601, -6.5458,
    -7.8098, -8.1429, -9.9910, -10.6741, -14.2828,
];

// p = 13, 244 trials
const RAW_ESTIMATE_P13: [f64; 101] = [
    5908.1114, 6107.6944, 6311.3021, 6520.1831, 6732.9533, 6950.6974, 7173.6430, 7400.9105,
    7633.7226, 7870.9540, 8112.0005, 8358.7716, 8610.2334, 8865.7835, 9125.5570, 9390.6011,
    9659.8479, 9934.2102, 10211.9368, 10494.0053, 10782.0616, 11071.5995, 11365.5754, 11665.2101,
    11967.3215, 12274.5195, 12584.4230, 12897.7859, 13214.0197, 13534.7089, 13859.7964, 14188.6196,
    14519.1451, 14856.2387, 15194.0934, 15536.4628, 15880.8127, 16230.0639, 16573.9182, 16925.5956,
    17279.2859, 17639.9728, 17999.2735, 18363.4423, 18729.6039, 19095.6200, 19464.9164, 19836.8549,
    20207.9655, 20579.5697, 20960.8818, 21339.0039, 21723.2199, 22106.0820, 22486.5710, 22872.8771,
    23258.1845, 23640.1472, 24031.7385, 24420.8806, 24814.4284, 25206.7241, 25601.1086, 25994.6425,
    26386.5146, 26785.3957, 27184.1199, 27578.1453, 27981.0235, 28380.0560, 28784.0956, 29186.7944,
    29588.1433, 29992.2739, 30392.9045, 30788.5755, 31189.6923, 31593.6073, 31996.5655, 32400.1501,
    32803.2538, 33212.0832, 33614.3202, 34020.1790, 34425.6138, 34833.7785, 35236.7240, 35640.1277,
    36055.8280, 36458.5467, 36862.5270, 37266.1500, 37675.9802, 38081.4974, 38492.0219, 38905.0776,
    39308.9657, 39712.2496, 40125.2193, 40538.0978, 40945.1565,
];

const BIAS_P13: [f64; 101] = [
    5908.1114, 5697.6944, 5492.3021, 5291.1831, 5094.9533, 4902.6974, 4715.6430, 4533.9105,
    4356.7226, 4184.9540, 4016.0005, 3852.7716, 3695.2334, 3540.7835, 3391.5570, 3246.6011,
    3105.8479, 2971.2102, 2838.9368, 2712.0053, 2590.0616, 2469.5995, 2354.5754, 2244.2101,
    2137.3215, 2034.5195, 1934.4230, 1838.7859, 1745.0197, 1656.7089, 1571.7964, 1490.6196,
    1412.1451, 1339.2387, 1268.0934, 1200.4628, 1134.8127, 1075.0639, 1008.9182, 951.5956,
    895.2859, 845.9728, 796.2735, 750.4423, 707.6039, 663.6200, 622.9164, 585.8549,
    546.9655, 509.5697, 480.8818, 449.0039, 424.2199, 397.0820, 368.5710, 344.8771,
    320.1845, 293.1472, 274.7385, 254.8806, 238.4284, 220.7241, 206.1086, 189.6425,
    172.5146, 161.3957, 150.1199, 135.1453, 128.0235, 118.0560, 112.0956, 104.7944,
    97.1433, 91.2739, 82.9045, 68.5755, 59.6923, 54.6073, 47.5655, 42.1501,
    35.2538, 34.0832, 27.3202, 23.1790, 19.6138, 17.7785, 10.7240, 5.1277,
    10.8280, 4.5467, -1.4730, -7.8500, -7.0198, -11.5026, -9.9781, -6.9224,
    -13.0343, -18.7504, -15.7807, -11.9022, -14.8435,
];

// p = 14, 122 trials
const RAW_ESTIMATE_P14: [f64; 101] = [
    11817.0010, 12215.3315, 12623.5193, 13042.1426, 13468.3958, 13903.1101, 14349.8058, 14806.9235,
    15272.4952, 15746.9778, 16228.9823, 16721.5047, 17227.2002, 17736.5206, 18254.9256, 18781.9223,
    19318.3777, 19866.4733, 20422.6071, 20989.3234, 21559.5535, 22143.3174, 22730.3648, 23329.0020,
    23931.8351, 24544.9211, 25167.9278, 25792.5803, 26432.4586, 27080.6561, 27731.6419, 28390.6020,
    29054.0192, 29720.9072, 30396.0812, 31072.1683, 31764.8969, 32459.5657, 33165.6102, 33869.5328,
    34584.7417, 35300.6713, 36029.6135, 36762.4046, 37498.8835, 38232.7736, 38971.8093, 39716.1776,
    40468.7831, 41223.9283, 41980.8733, 42740.5420, 43489.7327, 44260.6452, 45027.8343, 45805.1222,
    46576.3137, 47351.2619, 48125.8820, 48912.0567, 49703.4406, 50480.4975, 51256.0291, 52032.0100,
    52824.1302, 53616.5184, 54410.2020, 55201.7613, 56000.9591, 56802.4680, 57600.1837, 58396.2466,
    59204.7359, 60015.1347, 60818.3441, 61630.9469, 62432.8850, 63235.0933, 64049.2399, 64856.4780,
    65667.6695, 66475.9250, 67280.4170, 68086.1425, 68888.1704, 69701.2853, 70509.5373, 71323.6703,
    72144.1104, 72941.1042, 73769.7120, 74586.0640, 75391.3360, 76216.5000, 77010.7076, 77817.6382,
    78641.4647, 79464.6533, 80284.5617, 81101.3230, 81925.1737,
];

const BIAS_P14: [f64; 101] = [
    11817.0010, 11396.3315, 10985.5193, 10584.1426, 10191.3958, 9807.1101, 9434.8058, 9072.9235,
    8718.4952, 8373.9778, 8036.9823, 7710.5047, 7397.2002, 7086.5206, 6785.9256, 6493.9223,
    6211.3777, 5940.4733, 5676.6071, 5424.3234, 5175.5535, 4940.3174, 4708.3648, 4487.0020,
    4270.8351, 4064.9211, 3868.9278, 3674.5803, 3494.4586, 3323.6561, 3155.6419, 2995.6020,
    2840.0192, 2686.9072, 2543.0812, 2400.1683, 2273.8969, 2149.5657, 2035.6102, 1920.5328,
    1816.7417, 1713.6713, 1623.6135, 1536.4046, 1453.8835, 1368.7736, 1288.8093, 1214.1776,
    1146.7831, 1082.9283, 1020.8733, 961.5420, 891.7327, 842.6452, 790.8343, 749.1222,
    701.3137, 657.2619, 611.8820, 579.0567, 551.4406, 509.4975, 466.0291, 422.0100,
    395.1302, 368.5184, 343.2020, 315.7613, 294.9591, 277.4680, 256.1837, 233.2466,
    222.7359, 213.1347, 197.3441, 190.9469, 173.8850, 157.0933, 151.2399, 139.4780,
    131.6695, 120.9250, 106.4170, 92.1425, 75.1704, 69.2853, 58.5373, 53.6703,
    54.1104, 32.1042, 41.7120, 39.0640, 25.3360, 30.5000, 5.7076, -6.3618,
    -1.5353, 2.6533, 2.5617, 0.3230, 5.1737,
];

// p = 15, 64 trials
const RAW_ESTIMATE_P15: [f64; 101] = [
    23634.7801, 24431.6770, 25245.8288, 26079.8286, 26933.5183, 27805.2501, 28698.3449, 29609.9940,
    30537.3265, 31484.4251, 32452.1085, 33439.4937, 34443.0453, 35466.5981, 36504.5360, 37565.3299,
    38643.7575, 39737.8210, 40856.4528, 41990.9611, 43141.6774, 44308.6760, 45488.8804, 46683.4125,
    47888.0125, 49107.0255, 50358.0211, 51617.8746, 52891.9966, 54161.6721, 55459.9280, 56773.8507,
    58102.3178, 59445.0809, 60789.8991, 62158.0771, 63539.7119, 64922.0544, 66323.4633, 67718.1632,
    69144.2619, 70580.0535, 72021.0701, 73469.2393, 74932.1610, 76394.5691, 77875.6522, 79361.0150,
    80846.8991, 82343.5880, 83843.1218, 85347.1648, 86859.4579, 88393.6102, 89914.4285, 91439.9369,
    92979.4134, 94524.1716, 96083.3893, 97643.6903, 99202.4271, 100778.9412, 102335.7671, 103906.4136,
    105484.5748, 107070.7237, 108646.9444, 110254.8790, 111873.6317, 113469.6127, 115065.9530, 116664.3186,
    118269.4652, 119892.4243, 121523.2566, 123125.3507, 124725.9420, 126325.6245, 127962.5563, 129589.7162,
    131195.8970, 132799.0760, 134443.0119, 136068.3940, 137723.1716, 139367.7606, 140996.7453, 142619.2600,
    144259.7142, 145890.6981, 147552.9096, 149178.3707, 150807.6869, 152420.8668, 154033.4998, 155632.4972,
    157250.7577, 158887.4515, 160515.9490, 162179.3508, 163791.4057,
];

const BIAS_P15: [f64; 101] = [
    23634.7801, 22793.6770, 21968.8288, 21164.8286, 20379.5183, 19613.2501, 18868.3449, 18140.9940,
    17430.3265, 16738.4251, 16068.1085, 15417.4937, 14782.0453, 14167.5981, 13566.5360, 12989.3299,
    12429.7575, 11884.8210, 11365.4528, 10860.9611, 10373.6774, 9902.6760, 9443.8804, 9000.4125,
    8566.0125, 8147.0255, 7760.0211, 7380.8746, 7016.9966, 6647.6721, 6307.9280, 5983.8507,
    5673.3178, 5378.0809, 5083.8991, 4814.0771, 4557.7119, 4301.0544, 4064.4633, 3820.1632,
    3608.2619, 3406.0535, 3208.0701, 3018.2393, 2842.1610, 2666.5691, 2509.6522, 2356.0150,
    2203.8991, 2061.5880, 1923.1218, 1789.1648, 1662.4579, 1558.6102, 1440.4285, 1327.9369,
    1229.4134, 1135.1716, 1056.3893, 977.6903, 898.4271, 836.9412, 754.7671, 687.4136,
    626.5748, 574.7237, 512.9444, 481.8790, 462.6317, 419.6127, 377.9530, 338.3186,
    304.4652, 289.4243, 281.2566, 245.3507, 207.9420, 168.6245, 167.5563, 155.7162,
    123.8970, 89.0760, 94.0119, 81.3940, 97.1716, 103.7606, 94.7453, 78.2600,
    80.7142, 72.6981, 96.9096, 84.3707, 74.6869, 49.8668, 23.4998, -15.5028,
    -35.2423, -37.5485, -47.0510, -22.6492, -48.5943,
];

// p = 16, 64 trials
const RAW_ESTIMATE_P16: [f64; 101] = [
    47270.3385, 48863.3546, 50496.0341, 52167.7882, 53874.9756, 55619.6718, 57402.0404, 59219.2013,
    61071.8992, 62967.4845, 64899.7528, 66869.6778, 68877.2171, 70921.1328, 73006.0134, 75126.2700,
    77280.5851, 79466.5021, 81695.3246, 83963.7913, 86255.1462, 88582.1543, 90942.5236, 93333.7899,
    95763.0693, 98207.8881, 100693.1259, 103201.5878, 105745.2688, 108321.0215, 110919.1870, 113556.0095,
    116197.8645, 118864.8456, 121579.6595, 124315.0294, 127078.7461, 129857.8044, 132662.2419, 135482.0500,
    138319.6866, 141193.9047, 144072.1804, 146961.1420, 149892.8650, 152849.5065, 155798.2434, 158766.8576,
    161757.6536, 164752.2551, 167773.6274, 170792.2837, 173832.8238, 176870.7506, 179944.1003, 183023.5712,
    186102.3510, 189221.8042, 192352.7103, 195461.6667, 198623.7096, 201738.4252, 204889.7520, 208039.2761,
    211217.5698, 214372.0630, 217581.6095, 220748.3569, 223941.5889, 227156.1161, 230356.2328, 233528.6775,
    236746.8203, 239953.1206, 243159.4286, 246387.1406, 249615.5288, 252817.0802, 256021.8769, 259265.8986,
    262506.3740, 265760.2760, 269019.6849, 272261.9157, 275484.7581, 278705.9977, 281959.9941, 285155.8354,
    288414.2025, 291680.1160, 294956.8316, 298234.2093, 301495.3509, 304740.8642, 307968.1399, 311217.0058,
    314472.5982, 317710.6186, 320960.2356, 324230.3052, 327487.7866,
];

const BIAS_P16: [f64; 101] = [
    47270.3385, 45586.3546, 43942.0341, 42337.7882, 40767.9756, 39235.6718, 37741.0404, 36281.2013,
    34857.8992, 33476.4845, 32131.7528, 30824.6778, 29555.2171, 28323.1328, 27131.0134, 25974.2700,
    24851.5851, 23760.5021, 22713.3246, 21704.7913, 20719.1462, 19769.1543, 18852.5236, 17967.7899,
    17120.0693, 16287.8881, 15496.1259, 14727.5878, 13995.2688, 13294.0215, 12615.1870, 11975.0095,
    11339.8645, 10730.8456, 10168.6595, 9627.0294, 9113.7461, 8615.8044, 8144.2419, 7687.0500,
    7247.6866, 6844.9047, 6446.1804, 6059.1420, 5713.8650, 5393.5065, 5065.2434, 4756.8576,
    4471.6536, 4189.2551, 3933.6274, 3675.2837, 3438.8238, 3200.7506, 2997.1003, 2799.5712,
    2601.3510, 2443.8042, 2298.7103, 2130.6667, 2015.7096, 1853.4252, 1727.7520, 1601.2761,
    1502.5698, 1380.0630, 1312.6095, 1202.3569, 1119.5889, 1057.1161, 980.2328, 875.6775,
    816.8203, 747.1206, 676.4286, 627.1406, 578.5288, 503.0802, 431.8769, 398.8986,
    362.3740, 339.2760, 321.6849, 287.9157, 233.7581, 177.9977, 154.9941, 73.8354,
    56.2025, 45.1160, 44.8316, 45.2093, 29.3509, -1.1358, -50.8601, -78.9942,
    -100.4018, -139.3814, -165.7644, -172.6948, -192.2134,
];

// p = 17, 64 trials
const RAW_ESTIMATE_P17: [f64; 101] = [
    94541.4553, 97729.4548, 100988.3347, 104326.8242, 107742.9016, 111235.1120, 114804.8731, 118445.9444,
    122165.3461, 125953.2710, 129818.3405, 133754.8250, 137769.2396, 141868.0044, 146034.0464, 150269.6387,
    154571.0542, 158952.1353, 163402.0103, 167919.9042, 172498.2527, 177151.9971, 181879.3705, 186650.7917,
    191498.6301, 196396.3190, 201383.7799, 206430.3334, 211522.7052, 216655.9847, 221858.0172, 227121.2269,
    232422.2250, 237774.3142, 243189.6275, 248673.9893, 254183.6997, 259739.2577, 265331.0106, 270997.0261,
    276709.4774, 282426.4113, 288188.0988, 293989.4189, 299831.9234, 305697.6161, 311621.5518, 317618.5723,
    323592.2807, 329596.2394, 335629.5463, 341701.1878, 347809.2441, 353931.5005, 360071.7275, 366228.9203,
    372391.8255, 378593.5398, 384814.2770, 391079.5776, 397321.6028, 403614.2147, 409900.4394, 416181.8699,
    422496.5353, 428833.2532, 435145.8216, 441515.8753, 447927.8973, 454308.1574, 460724.7475, 467126.0523,
    473553.7615, 479973.2536, 486397.2680, 492841.0788, 499273.2735, 505731.8723, 512216.0901, 518743.8657,
    525212.8781, 531662.1709, 538132.9819, 544646.1080, 551159.2532, 557706.4218, 564243.5633, 570815.5554,
    577334.0760, 583863.3296, 590427.1576, 596941.3304, 603419.2806, 609951.8775, 616469.2081, 623008.9455,
    629549.6303, 636040.2540, 642560.6110, 649081.7112, 655596.8547,
];

const BIAS_P17: [f64; 101] = [
    94541.4553, 91175.4548, 87881.3347, 84665.8242, 81528.9016, 78467.1120, 75482.8731, 72570.9444,
    69736.3461, 66971.2710, 64282.3405, 61664.8250, 59126.2396, 56671.0044, 54284.0464, 51965.6387,
    49713.0542, 47541.1353, 45437.0103, 43401.9042, 41426.2527, 39525.9971, 37700.3705, 35917.7917,
    34212.6301, 32556.3190, 30989.7799, 29483.3334, 28021.7052, 26601.9847, 25250.0172, 23959.2269,
    22707.2250, 21505.3142, 20367.6275, 19297.9893, 18253.6997, 17256.2577, 16294.0106, 15407.0261,
    14565.4774, 13728.4113, 12937.0988, 12184.4189, 11473.9234, 10785.6161, 10155.5518, 9599.5723,
    9019.2807, 8470.2394, 7949.5463, 7467.1878, 7022.2441, 6590.5005, 6177.7275, 5780.9203,
    5389.8255, 5038.5398, 4705.2770, 4417.5776, 4105.6028, 3844.2147, 3577.4394, 3304.8699,
    3066.5353, 2849.2532, 2607.8216, 2424.8753, 2282.8973, 2110.1574, 1972.7475, 1820.0523,
    1694.7615, 1560.2536, 1431.2680, 1321.0788, 1199.2735, 1104.8723, 1035.0901, 1009.8657,
    924.8781, 820.1709, 737.9819, 697.1080, 657.2532, 650.4218, 633.5633, 652.5554,
    617.0760, 593.3296, 603.1576, 563.3304, 488.2806, 466.8775, 431.2081, 416.9455,
    403.6303, 341.2540, 307.6110, 275.7112, 236.8547,
];

// p = 18, 64 trials
const RAW_ESTIMATE_P18: [f64; 101] = [
    189083.6889, 195460.4357, 201988.9908, 208672.0480, 215499.8267, 222478.8745, 229617.3868, 236901.6864,
    244333.2835, 251920.0441, 259651.4122, 267531.9652, 275563.7880, 283744.3758, 292072.4881, 300544.5261,
    309161.4877, 317923.8846, 326815.2133, 335851.7610, 345005.3280, 354307.0498, 363742.3690, 373315.0546,
    383006.7332, 392818.4584, 402758.1293, 412803.7085, 422959.4108, 433260.7531, 443667.5209, 454172.2200,
    464789.6332, 475496.4889, 486336.7708, 497237.5197, 508275.2564, 519410.0759, 530616.3676, 541940.8279,
    553314.0253, 564771.6911, 576272.5538, 587873.9666, 599594.9314, 611380.2949, 623247.5021, 635169.1267,
    647086.9946, 659088.1769, 671177.7597, 683289.6358, 695491.1499, 707679.8233, 720032.8223, 732309.4098,
    744667.1830, 757104.4291, 769576.9136, 782057.9465, 794615.6799, 807232.8282, 819791.0260, 832412.1089,
    845060.2521, 857759.2099, 870462.1271, 883213.8719, 896000.1441, 908702.0626, 921517.8481, 934268.6658,
    947116.3460, 959979.6134, 972919.5525, 985818.2875, 998731.8288, 1011617.1337, 1024576.9782, 1037483.3919,
    1050380.5407, 1063396.0378, 1076267.4086, 1089269.6777, 1102263.2699, 1115258.3500, 1128234.9335, 1141288.2543,
    1154240.1398, 1167270.9791, 1180236.0630, 1193289.7915, 1206383.6218, 1219376.7351, 1232407.1360, 1245479.3309,
    1258464.4736, 1271541.4069, 1284607.7984, 1297684.5496, 1310830.9470,
];

const BIAS_P18: [f64; 101] = [
    189083.6889, 182353.4357, 175774.9908, 169350.0480, 163070.8267, 156942.8745, 150974.3868, 145151.6864,
    139475.2835, 133955.0441, 128579.4122, 123352.9652, 118277.7880, 113350.3758, 108571.4881, 103936.5261,
    99446.4877, 95101.8846, 90885.2133, 86814.7610, 82861.3280, 79056.0498, 75384.3690, 71849.0546,
    68433.7332, 65138.4584, 61971.1293, 58909.7085, 55957.4108, 53151.7531, 50451.5209, 47849.2200,
    45359.6332, 42958.4889, 40691.7708, 38485.5197, 36416.2564, 34444.0759, 32542.3676, 30759.8279,
    29026.0253, 27376.6911, 25770.5538, 24263.9666, 22877.9314, 21556.2949, 20316.5021, 19131.1267,
    17940.9946, 16835.1769, 15817.7597, 14822.6358, 13917.1499, 12997.8233, 12243.8223, 11413.4098,
    10664.1830, 9994.4291, 9358.9136, 8732.9465, 8183.6799, 7693.8282, 7145.0260, 6658.1089,
    6199.2521, 5791.2099, 5387.1271, 5031.8719, 4710.1441, 4305.0626, 4013.8481, 3657.6658,
    3398.3460, 3153.6134, 2986.5525, 2778.2875, 2584.8288, 2363.1337, 2214.9782, 2014.3919,
    1804.5407, 1713.0378, 1477.4086, 1371.6777, 1258.2699, 1146.3500, 1015.9335, 962.2543,
    806.1398, 729.9791, 588.0630, 534.7915, 521.6218, 406.7351, 330.1360, 295.3309,
    173.4736, 143.4069, 101.7984, 71.5496, 110.9470,
];
